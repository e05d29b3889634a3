//! Public API Layer
//!
use crate::kernels::constants::{HASH_SIZE_256, HASH_SIZE_512};
use crate::streaming::{Streebog256, Streebog512, StreebogHasher};
use crate::types::{HashOutput, Variant};
use subtle::ConstantTimeEq;

// =============================================================================
// HASHING
// =============================================================================

/// Compute the Streebog digest of `input` for the requested size.
///
/// # Example
/// ```rust
/// use streebog::Variant;
///
/// let digest = streebog::hash(b"abc", Variant::Streebog256);
/// assert_eq!(digest.len(), 32);
/// ```
#[must_use]
pub fn hash(input: &[u8], variant: Variant) -> HashOutput {
    let mut hasher = StreebogHasher::new(variant);
    hasher.update(input);
    hasher.finalize()
}

/// Compute Streebog-256.
///
/// # Example
/// ```rust
/// let digest = streebog::hash256(b"");
/// assert_eq!(
///     hex::encode(digest),
///     "3f539a213e97c802cc229d474c6aa32a825a360b2a933a949fd925208d9ce1bb"
/// );
/// ```
#[must_use]
#[inline]
pub fn hash256(input: &[u8]) -> [u8; HASH_SIZE_256] {
    let mut hasher = Streebog256::new();
    hasher.update(input);
    hasher.finalize()
}

/// Compute Streebog-512.
#[must_use]
#[inline]
pub fn hash512(input: &[u8]) -> [u8; HASH_SIZE_512] {
    let mut hasher = Streebog512::new();
    hasher.update(input);
    hasher.finalize()
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Verify a digest of either size in constant time.
///
/// A wrong-length `expected` never matches.
#[must_use]
pub fn verify(input: &[u8], variant: Variant, expected: &[u8]) -> bool {
    let computed = hash(input, variant);
    computed.as_bytes().ct_eq(expected).into()
}

/// Verify a Streebog-256 digest in constant time.
///
/// # Example
/// ```rust
/// let data = b"Secure Data";
/// let digest = streebog::hash256(data);
/// assert!(streebog::verify256(data, &digest));
/// ```
#[must_use]
pub fn verify256(input: &[u8], expected: &[u8; HASH_SIZE_256]) -> bool {
    let computed = hash256(input);
    computed.ct_eq(expected).into()
}

/// Verify a Streebog-512 digest in constant time.
#[must_use]
pub fn verify512(input: &[u8], expected: &[u8; HASH_SIZE_512]) -> bool {
    let computed = hash512(input);
    computed.ct_eq(expected).into()
}
