//! Primitive 512-bit transforms: X, S, P, L and modular addition.
//!
//! Every function takes its operands by reference and returns a fresh
//! vector, so no input is ever aliased with an output.

use crate::kernels::constants::{BLOCK_SIZE, SBOX, TAU};
use crate::kernels::tables::LINEAR_TABLE;

/// 512-bit vector, most-significant byte first.
pub type State512 = [u8; BLOCK_SIZE];

/// All-zero vector (the `N` argument of the finalization folds).
pub const ZERO: State512 = [0u8; BLOCK_SIZE];

// =============================================================================
// X, S, P, L
// =============================================================================

/// X-transformation: byte-wise XOR.
#[inline]
pub fn xor512(a: &State512, b: &State512) -> State512 {
    let mut out = ZERO;
    for (o, (x, y)) in out.iter_mut().zip(a.iter().zip(b)) {
        *o = x ^ y;
    }
    out
}

/// S-transformation: byte substitution through π′.
#[inline]
pub fn substitute(v: &State512) -> State512 {
    core::array::from_fn(|i| SBOX[usize::from(v[i])])
}

/// P-transformation: byte transposition through τ.
#[inline]
pub fn permute(v: &State512) -> State512 {
    core::array::from_fn(|i| v[usize::from(TAU[i])])
}

/// L-transformation: GF(2)-linear map applied to each 64-bit lane.
#[inline]
pub fn linear(v: &State512) -> State512 {
    let mut out = ZERO;
    for (src, dst) in v.chunks_exact(8).zip(out.chunks_exact_mut(8)) {
        let mut acc = 0u64;
        for (row, &byte) in LINEAR_TABLE.iter().zip(src) {
            acc ^= row[usize::from(byte)];
        }
        dst.copy_from_slice(&acc.to_be_bytes());
    }
    out
}

/// Composition `L ∘ P ∘ S`, the body of every round.
#[inline]
pub fn lps(v: &State512) -> State512 {
    linear(&permute(&substitute(v)))
}

// =============================================================================
// ARITHMETIC
// =============================================================================

/// Addition modulo 2^512 of two big-endian vectors.
#[inline]
pub fn add512(a: &State512, b: &State512) -> State512 {
    let mut out = ZERO;
    let mut carry = 0u16;
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b).rev() {
        let [hi, lo] = (u16::from(x) + u16::from(y) + carry).to_be_bytes();
        *o = lo;
        carry = u16::from(hi);
    }
    out
}

/// Vector holding `bits` as a 16-bit big-endian integer in its last two bytes.
#[inline]
pub fn bit_length(bits: u16) -> State512 {
    let mut out = ZERO;
    out[BLOCK_SIZE - 2..].copy_from_slice(&bits.to_be_bytes());
    out
}
