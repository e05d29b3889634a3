//! Streebog chaining state and per-block processing.

use crate::kernels::compress::compress;
use crate::kernels::constants::{BLOCK_BITS, BLOCK_SIZE};
use crate::kernels::transforms::{add512, bit_length, State512, ZERO};

// =============================================================================
// STATE
// =============================================================================

/// Chaining value `h`, bit counter `N` and checksum `Σ`.
#[derive(Clone)]
pub struct StreebogState {
    pub(crate) h: State512,
    pub(crate) n: State512,
    pub(crate) sigma: State512,
}

impl StreebogState {
    /// Fresh state with the given initial chaining value.
    pub const fn new(iv: State512) -> Self {
        Self {
            h: iv,
            n: ZERO,
            sigma: ZERO,
        }
    }

    /// Absorb one block already in internal (most-significant first) order.
    ///
    /// `bits` is the number of genuine message bits in the block.
    #[inline]
    pub fn process_block(&mut self, block: &State512, bits: u16) {
        self.h = compress(&self.n, &self.h, block);
        self.n = add512(&self.n, &bit_length(bits));
        self.sigma = add512(&self.sigma, block);
    }

    /// Absorb a full 64-byte chunk of message bytes.
    #[inline]
    pub fn compress_chunk(&mut self, chunk: &[u8; BLOCK_SIZE]) {
        let mut block = *chunk;
        block.reverse();
        self.process_block(&block, BLOCK_BITS);
    }

    /// Pad and absorb the final `0..64` message bytes.
    ///
    /// Called exactly once per message, even when `tail` is empty.
    pub fn compress_tail(&mut self, tail: &[u8]) {
        debug_assert!(tail.len() < BLOCK_SIZE);
        let mut block = ZERO;
        block[..tail.len()].copy_from_slice(tail);
        block[tail.len()] = 0x01;
        block.reverse();
        // tail.len() < 64
        #[allow(clippy::cast_possible_truncation)]
        let bits = tail.len() as u16 * 8;
        self.process_block(&block, bits);
    }
}
