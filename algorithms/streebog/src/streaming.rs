//! Streaming Hasher
//!
//! Incremental hashing with a single 64-byte residual buffer. Complete blocks
//! are compressed as soon as they are available; padding is applied once, at
//! finalization, so the digest does not depend on how the input was split
//! across `update` calls.

use crate::kernels::constants::{BLOCK_SIZE, HASH_SIZE_256, HASH_SIZE_512};
use crate::kernels::finalize::truncate;
use crate::kernels::state::StreebogState;
use crate::types::{HashOutput, Variant};

#[cfg(feature = "digest-trait")]
use crypto_common::BlockSizeUser;
#[cfg(feature = "digest-trait")]
use digest::typenum::{U32, U64};
#[cfg(feature = "digest-trait")]
use digest::Output;
#[cfg(feature = "digest-trait")]
use digest::{FixedOutput, FixedOutputReset, HashMarker, OutputSizeUser, Reset, Update};

// =============================================================================
// STREAMING HASHER
// =============================================================================

/// Streaming Streebog hasher for either digest size.
#[derive(Clone)]
pub struct StreebogHasher {
    variant: Variant,
    state: StreebogState,
    /// Residual bytes of an incomplete block.
    buffer: [u8; BLOCK_SIZE],
    /// Number of valid bytes in `buffer` (always < `BLOCK_SIZE`).
    buffered: usize,
}

impl StreebogHasher {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Create a hasher producing a digest of the given size.
    #[must_use]
    pub const fn new(variant: Variant) -> Self {
        Self {
            variant,
            state: StreebogState::new(variant.iv()),
            buffer: [0u8; BLOCK_SIZE],
            buffered: 0,
        }
    }

    /// Create a Streebog-256 hasher.
    #[must_use]
    pub const fn new_256() -> Self {
        Self::new(Variant::Streebog256)
    }

    /// Create a Streebog-512 hasher.
    #[must_use]
    pub const fn new_512() -> Self {
        Self::new(Variant::Streebog512)
    }

    /// Digest size this hasher was created for.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Add data to the hasher.
    pub fn update(&mut self, mut data: &[u8]) {
        // Top up a partially filled buffer first
        if self.buffered > 0 {
            let take = (BLOCK_SIZE - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < BLOCK_SIZE {
                return;
            }
            let block = self.buffer;
            self.state.compress_chunk(&block);
            self.buffered = 0;
        }

        // Zero-copy path for whole blocks straight from the input
        let (blocks, remainder) = data.as_chunks::<BLOCK_SIZE>();
        for block in blocks {
            self.state.compress_chunk(block);
        }

        self.buffer[..remainder.len()].copy_from_slice(remainder);
        self.buffered = remainder.len();
    }

    /// Finalize and return the digest.
    ///
    /// Consumes the hasher; use [`finalize_reset`](Self::finalize_reset) to
    /// keep hashing with the same value.
    #[must_use]
    pub fn finalize(self) -> HashOutput {
        let full = self.state.finalize(&self.buffer[..self.buffered]);
        truncate(self.variant, &full)
    }

    /// Finalize, then reset the hasher to its initial state.
    pub fn finalize_reset(&mut self) -> HashOutput {
        let fresh = Self::new(self.variant);
        core::mem::replace(self, fresh).finalize()
    }

    /// Reset hasher for reuse.
    pub const fn reset(&mut self) {
        *self = Self::new(self.variant);
    }
}

// =============================================================================
// FIXED-SIZE HASHERS
// =============================================================================

macro_rules! fixed_hasher {
    ($(#[$doc:meta])* $name:ident, $variant:expr, $size:expr, $typenum:ty) => {
        $(#[$doc])*
        #[derive(Clone)]
        pub struct $name {
            inner: StreebogHasher,
        }

        impl $name {
            /// Create a new hasher.
            #[must_use]
            pub const fn new() -> Self {
                Self {
                    inner: StreebogHasher::new($variant),
                }
            }

            /// Add data to the hasher.
            pub fn update(&mut self, data: &[u8]) {
                self.inner.update(data);
            }

            /// Finalize and return the digest.
            #[must_use]
            pub fn finalize(self) -> [u8; $size] {
                let mut out = [0u8; $size];
                out.copy_from_slice(self.inner.finalize().as_bytes());
                out
            }

            /// Reset hasher for reuse.
            pub const fn reset(&mut self) {
                self.inner.reset();
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<$name> for StreebogHasher {
            fn from(hasher: $name) -> Self {
                hasher.inner
            }
        }

        #[cfg(feature = "digest-trait")]
        impl OutputSizeUser for $name {
            type OutputSize = $typenum;
        }

        #[cfg(feature = "digest-trait")]
        impl BlockSizeUser for $name {
            type BlockSize = U64;
        }

        #[cfg(feature = "digest-trait")]
        impl Update for $name {
            fn update(&mut self, data: &[u8]) {
                self.inner.update(data);
            }
        }

        #[cfg(feature = "digest-trait")]
        impl FixedOutput for $name {
            fn finalize_into(self, out: &mut Output<Self>) {
                out.copy_from_slice(self.inner.finalize().as_bytes());
            }
        }

        #[cfg(feature = "digest-trait")]
        impl FixedOutputReset for $name {
            fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
                out.copy_from_slice(self.inner.finalize_reset().as_bytes());
            }
        }

        #[cfg(feature = "digest-trait")]
        impl Reset for $name {
            fn reset(&mut self) {
                self.inner.reset();
            }
        }

        #[cfg(feature = "digest-trait")]
        impl HashMarker for $name {}
    };
}

fixed_hasher!(
    /// Streebog-256 hasher with a fixed 32-byte output.
    Streebog256,
    Variant::Streebog256,
    HASH_SIZE_256,
    U32
);

fixed_hasher!(
    /// Streebog-512 hasher with a fixed 64-byte output.
    Streebog512,
    Variant::Streebog512,
    HASH_SIZE_512,
    U64
);
