//! Precomputed Tables
//!
//! Expanded forms of the constants in [`constants`](super::constants), built
//! once by `const fn` at compile time. Both tables are read-only statics shared
//! by every hasher in the process.

use crate::kernels::constants::{BLOCK_SIZE, LINEAR_MATRIX, ROUNDS, ROUND_CONSTANTS};
use crate::kernels::transforms::State512;

// =============================================================================
// L-TRANSFORMATION TABLE
// =============================================================================

/// Byte-indexed L-transformation table.
///
/// `LINEAR_TABLE[p][x]` is the image under `l` of a 64-bit lane whose byte
/// `p` (0 = most significant) equals `x` and whose other bytes are zero.
/// Since `l` is linear over GF(2), a full lane is the XOR of its eight entries.
pub static LINEAR_TABLE: [[u64; 256]; 8] = build_linear_table();

const fn build_linear_table() -> [[u64; 256]; 8] {
    let mut table = [[0u64; 256]; 8];
    let mut pos = 0;
    while pos < 8 {
        let mut byte = 0;
        while byte < 256 {
            let mut acc = 0u64;
            let mut bit = 0;
            while bit < 8 {
                // Bit 7 of byte `pos` is lane bit 63 - 8 * pos, i.e. matrix row 8 * pos.
                if (byte >> bit) & 1 == 1 {
                    acc ^= LINEAR_MATRIX[pos * 8 + 7 - bit];
                }
                bit += 1;
            }
            table[pos][byte] = acc;
            byte += 1;
        }
        pos += 1;
    }
    table
}

// =============================================================================
// ITERATION CONSTANTS
// =============================================================================

/// Key-schedule constants `C1..C12` as 64-byte state vectors.
pub static ITERATION_CONSTANTS: [State512; ROUNDS] = build_iteration_constants();

const fn build_iteration_constants() -> [State512; ROUNDS] {
    let mut out = [[0u8; BLOCK_SIZE]; ROUNDS];
    let mut round = 0;
    while round < ROUNDS {
        let mut word = 0;
        while word < 8 {
            let bytes = ROUND_CONSTANTS[round][word].to_be_bytes();
            let mut b = 0;
            while b < 8 {
                out[round][word * 8 + b] = bytes[b];
                b += 1;
            }
            word += 1;
        }
        round += 1;
    }
    out
}
