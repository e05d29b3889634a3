#![cfg_attr(not(feature = "std"), no_std)]

//! # Streebog
//!
//! GOST R 34.11-2012 hash function with 256-bit and 512-bit digests.
//! Portable, table-driven and free of `unsafe` outside the C bindings.

//! # Usage
//! ```rust
//! use streebog::{Hasher, Variant};
//!
//! // 1. One-shot Hashing
//! let digest = streebog::hash256(b"Message");
//! println!("{}", hex::encode(digest));
//!
//! // 2. Secure Verification
//! assert!(streebog::verify256(b"Message", &digest));
//!
//! // 3. Streaming (Big Data / Files)
//! let mut hasher = Hasher::new(Variant::Streebog512);
//! hasher.update(b"Chunk 1");
//! hasher.update(b"Chunk 2");
//! let digest = hasher.finalize();
//! assert_eq!(digest, streebog::hash(b"Chunk 1Chunk 2", Variant::Streebog512));
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

mod engine;
#[cfg(feature = "std")]
mod ffi;
// Internal kernels stay reachable for tests and the table printer, hidden from docs
#[doc(hidden)]
pub mod kernels;
mod oneshot;
mod streaming;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

#[cfg(feature = "digest-trait")]
pub use digest;
pub use engine::parallel::hash_batch;
pub use kernels::constants::{HASH_SIZE_256, HASH_SIZE_512};
pub use oneshot::{hash, hash256, hash512, verify, verify256, verify512};
pub use streaming::{Streebog256, Streebog512, StreebogHasher as Hasher};
pub use types::{HashOutput, UnsupportedVariantError, Variant};
