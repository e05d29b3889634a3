//! Shared types used across the Streebog library.

use core::fmt;
use core::ops::Deref;
use core::str::FromStr;
#[cfg(feature = "std")]
use std::error;

use subtle::ConstantTimeEq;

use crate::kernels::constants::{HASH_SIZE_256, HASH_SIZE_512, IV_256, IV_512};
use crate::kernels::transforms::State512;

// =============================================================================
// VARIANT
// =============================================================================

/// Digest size selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// 256-bit digest (32 bytes).
    Streebog256,
    /// 512-bit digest (64 bytes).
    Streebog512,
}

impl Variant {
    /// Digest length in bytes.
    #[must_use]
    pub const fn output_size(self) -> usize {
        match self {
            Self::Streebog256 => HASH_SIZE_256,
            Self::Streebog512 => HASH_SIZE_512,
        }
    }

    /// Digest length in bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Streebog256 => 256,
            Self::Streebog512 => 512,
        }
    }

    /// Canonical algorithm name, e.g. `Streebog256`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Streebog256 => "Streebog256",
            Self::Streebog512 => "Streebog512",
        }
    }

    /// Initial chaining value for this variant.
    pub(crate) const fn iv(self) -> State512 {
        match self {
            Self::Streebog256 => IV_256,
            Self::Streebog512 => IV_512,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u32> for Variant {
    type Error = UnsupportedVariantError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            256 => Ok(Self::Streebog256),
            512 => Ok(Self::Streebog512),
            other => Err(UnsupportedVariantError::Size(other)),
        }
    }
}

impl FromStr for Variant {
    type Err = UnsupportedVariantError;

    /// Accepts a bit size (`"256"`) or a name (`"streebog512"`, any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("streebog256") {
            return Ok(Self::Streebog256);
        }
        if s.eq_ignore_ascii_case("streebog512") {
            return Ok(Self::Streebog512);
        }
        s.parse::<u32>()
            .map_err(|_| UnsupportedVariantError::Name)
            .and_then(Self::try_from)
    }
}

// =============================================================================
// OUTPUT
// =============================================================================

/// Digest of either size.
///
/// Equality is evaluated in constant time.
#[derive(Clone, Copy)]
pub struct HashOutput {
    bytes: [u8; HASH_SIZE_512],
    variant: Variant,
}

impl HashOutput {
    /// Copies `digest` (exactly `variant.output_size()` bytes) into an output.
    pub(crate) fn new(variant: Variant, digest: &[u8]) -> Self {
        debug_assert_eq!(digest.len(), variant.output_size());
        let mut bytes = [0u8; HASH_SIZE_512];
        bytes[..digest.len()].copy_from_slice(digest);
        Self { bytes, variant }
    }

    /// Digest bytes (32 or 64 of them).
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.variant.output_size()]
    }

    /// Digest length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.variant.output_size()
    }

    /// Always `false`; present for API symmetry with slices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// The variant that produced this digest.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }
}

impl Deref for HashOutput {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for HashOutput {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for HashOutput {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes().ct_eq(other.as_bytes()).into()
    }
}

impl Eq for HashOutput {}

/// Constant-time comparison against raw digest bytes.
impl PartialEq<[u8]> for HashOutput {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes().ct_eq(other).into()
    }
}

impl fmt::LowerHex for HashOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.as_bytes() {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for HashOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({self:x})", self.variant)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Error for a digest size or algorithm name that is not Streebog-256/512.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedVariantError {
    /// A bit size other than 256 or 512 was requested.
    Size(u32),
    /// The string was neither a bit size nor a known algorithm name.
    Name,
}

impl fmt::Display for UnsupportedVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Size(bits) => write!(
                f,
                "unsupported Streebog digest size: {bits} bits (expected 256 or 512)"
            ),
            Self::Name => f.write_str(
                "unrecognized Streebog variant (expected 256, 512, streebog256 or streebog512)",
            ),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for UnsupportedVariantError {}
