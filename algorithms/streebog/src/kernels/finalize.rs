//! Finalization: length and checksum folds, byte-order correction, truncation.

use crate::kernels::compress::compress;
use crate::kernels::constants::HASH_SIZE_512;
use crate::kernels::state::StreebogState;
use crate::kernels::transforms::{State512, ZERO};
use crate::types::{HashOutput, Variant};

impl StreebogState {
    /// Pad the remaining bytes, fold in `N` and `Σ`, and return the full
    /// 512-bit result in output (least-significant first) byte order.
    pub fn finalize(mut self, tail: &[u8]) -> State512 {
        self.compress_tail(tail);

        tracing::trace!(
            message_bits = u64::from_be_bytes(low_word(&self.n)),
            "folding length and checksum"
        );

        self.h = compress(&ZERO, &self.h, &self.n);
        self.h = compress(&ZERO, &self.h, &self.sigma);

        let mut out = self.h;
        out.reverse();
        out
    }
}

/// Select the digest bytes for `variant` from a full finalized vector.
///
/// Streebog-256 is the most significant half of `h`, which after byte
/// reversal sits at offsets `32..64`.
pub fn truncate(variant: Variant, full: &State512) -> HashOutput {
    let start = HASH_SIZE_512 - variant.output_size();
    HashOutput::new(variant, &full[start..])
}

fn low_word(v: &State512) -> [u8; 8] {
    let mut word = [0u8; 8];
    word.copy_from_slice(&v[v.len() - 8..]);
    word
}
