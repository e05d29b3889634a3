//! Parallel Execution Engine
//!
//! Hashes many independent inputs at once. Every input gets its own hasher,
//! so workers share nothing but the read-only constant tables. Uses Rayon
//! when the `multithread` feature is enabled, otherwise runs serially.

use crate::oneshot;
use crate::types::{HashOutput, Variant};
use tracing::instrument;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// =============================================================================
// BATCH HASHING
// =============================================================================

/// Hash every input independently; results are returned in input order.
///
/// # Example
/// ```rust
/// use streebog::{hash, hash_batch, Variant};
///
/// let inputs: [&[u8]; 2] = [b"first", b"second"];
/// let digests = hash_batch(&inputs, Variant::Streebog512);
/// assert_eq!(digests[1], hash(b"second", Variant::Streebog512));
/// ```
#[instrument(level = "debug", skip_all, fields(count = inputs.len(), variant = %variant))]
pub fn hash_batch<I>(inputs: &[I], variant: Variant) -> Vec<HashOutput>
where
    I: AsRef<[u8]> + Sync,
{
    inputs.process_each(|input| oneshot::hash(input.as_ref(), variant))
}

/// Helper for feature-agnostic batch processing
trait BatchProcessor<I> {
    fn process_each<F, R>(self, f: F) -> Vec<R>
    where
        F: Fn(&I) -> R + Sync + Send,
        R: Send;
}

impl<I: Sync> BatchProcessor<I> for &[I] {
    fn process_each<F, R>(self, f: F) -> Vec<R>
    where
        F: Fn(&I) -> R + Sync + Send,
        R: Send,
    {
        #[cfg(feature = "multithread")]
        {
            use rayon::prelude::*;
            self.par_iter().map(f).collect()
        }
        #[cfg(not(feature = "multithread"))]
        {
            self.iter().map(f).collect()
        }
    }
}
