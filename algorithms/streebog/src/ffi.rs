//! C-API Bindings
//!
//! Exposes Streebog to C/C++ via FFI with pointer safety and panic boundaries.

#![allow(unsafe_code)]

use crate::oneshot;
use crate::streaming::StreebogHasher;
use crate::types::Variant;

use std::panic::{self, AssertUnwindSafe};
use std::ptr;
use std::slice;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Status: success.
pub const STREEBOG_OK: i32 = 0;
/// Status: a required pointer was null.
pub const STREEBOG_ERR_NULL: i32 = -1;
/// Status: a panic was caught at the boundary.
pub const STREEBOG_ERR_PANIC: i32 = -2;
/// Status: digest size other than 256 or 512 bits.
pub const STREEBOG_ERR_SIZE: i32 = -3;

/// Borrow `len` input bytes; a null pointer is accepted only for empty input.
const unsafe fn input_slice<'a>(ptr: *const u8, len: usize) -> Option<&'a [u8]> {
    if ptr.is_null() {
        return if len == 0 { Some(&[]) } else { None };
    }
    Some(slice::from_raw_parts(ptr, len))
}

fn variant_from_bits(bits: u32) -> Option<Variant> {
    match Variant::try_from(bits) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(error = %e, "rejected FFI digest size");
            None
        }
    }
}

// =============================================================================
// ONE-SHOT API
// =============================================================================

/// Compute a Streebog digest of `bits` (256 or 512) bits.
///
/// # Safety
/// - `input_ptr` must be valid for `input_len` bytes (may be null if `input_len == 0`)
/// - `output_ptr` must be valid for `bits / 8` writable bytes
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
/// - `-3`: Unsupported digest size
#[no_mangle]
pub unsafe extern "C" fn streebog_hash(
    input_ptr: *const u8,
    input_len: usize,
    bits: u32,
    output_ptr: *mut u8,
) -> i32 {
    let Some(variant) = variant_from_bits(bits) else {
        return STREEBOG_ERR_SIZE;
    };
    if output_ptr.is_null() {
        return STREEBOG_ERR_NULL;
    }
    let Some(input) = input_slice(input_ptr, input_len) else {
        return STREEBOG_ERR_NULL;
    };

    let result = panic::catch_unwind(|| {
        let digest = oneshot::hash(input, variant);
        ptr::copy_nonoverlapping(digest.as_ptr(), output_ptr, digest.len());
    });

    match result {
        Ok(()) => STREEBOG_OK,
        Err(_) => STREEBOG_ERR_PANIC,
    }
}

/// Compute Streebog-256.
///
/// # Safety
/// - `input_ptr` must be valid for `input_len` bytes
/// - `output_ptr` must be valid for 32 writable bytes
///
/// # Returns
/// Same codes as `streebog_hash`.
#[no_mangle]
pub unsafe extern "C" fn streebog256_hash(
    input_ptr: *const u8,
    input_len: usize,
    output_ptr: *mut u8,
) -> i32 {
    streebog_hash(input_ptr, input_len, 256, output_ptr)
}

/// Compute Streebog-512.
///
/// # Safety
/// - `input_ptr` must be valid for `input_len` bytes
/// - `output_ptr` must be valid for 64 writable bytes
///
/// # Returns
/// Same codes as `streebog_hash`.
#[no_mangle]
pub unsafe extern "C" fn streebog512_hash(
    input_ptr: *const u8,
    input_len: usize,
    output_ptr: *mut u8,
) -> i32 {
    streebog_hash(input_ptr, input_len, 512, output_ptr)
}

/// Verify data matches an expected digest in constant time.
///
/// # Safety
/// - `input_ptr` must be valid for `input_len` bytes
/// - `hash_ptr` must point to exactly `bits / 8` bytes
///
/// # Returns
/// - `1`: Match
/// - `0`: No match
/// - `-1`: Null pointer
/// - `-2`: Panic
/// - `-3`: Unsupported digest size
#[no_mangle]
pub unsafe extern "C" fn streebog_verify(
    input_ptr: *const u8,
    input_len: usize,
    bits: u32,
    hash_ptr: *const u8,
) -> i32 {
    let Some(variant) = variant_from_bits(bits) else {
        return STREEBOG_ERR_SIZE;
    };
    if hash_ptr.is_null() {
        return STREEBOG_ERR_NULL;
    }
    let Some(input) = input_slice(input_ptr, input_len) else {
        return STREEBOG_ERR_NULL;
    };

    let result = panic::catch_unwind(|| {
        let expected = slice::from_raw_parts(hash_ptr, variant.output_size());
        oneshot::verify(input, variant, expected)
    });

    match result {
        Ok(true) => 1,
        Ok(false) => 0,
        Err(_) => STREEBOG_ERR_PANIC,
    }
}

// =============================================================================
// STREAMING API
// =============================================================================

/// Create a streaming hasher. Returns null for an unsupported `bits` value.
///
/// The handle must be released with `streebog_hasher_finalize` or
/// `streebog_hasher_free`.
#[no_mangle]
pub extern "C" fn streebog_hasher_new(bits: u32) -> *mut StreebogHasher {
    variant_from_bits(bits).map_or(ptr::null_mut(), |variant| {
        Box::into_raw(Box::new(StreebogHasher::new(variant)))
    })
}

/// Feed bytes into a streaming hasher.
///
/// # Safety
/// - `hasher` must come from `streebog_hasher_new` and not be freed yet
/// - `input_ptr` must be valid for `input_len` bytes
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn streebog_hasher_update(
    hasher: *mut StreebogHasher,
    input_ptr: *const u8,
    input_len: usize,
) -> i32 {
    if hasher.is_null() {
        return STREEBOG_ERR_NULL;
    }
    let Some(input) = input_slice(input_ptr, input_len) else {
        return STREEBOG_ERR_NULL;
    };

    let hasher = &mut *hasher;
    let result = panic::catch_unwind(AssertUnwindSafe(|| hasher.update(input)));

    match result {
        Ok(()) => STREEBOG_OK,
        Err(_) => STREEBOG_ERR_PANIC,
    }
}

/// Finalize a streaming hasher, write the digest and free the handle.
///
/// The handle is freed even when an error code is returned, except for a
/// null `hasher`.
///
/// # Safety
/// - `hasher` must come from `streebog_hasher_new` and not be freed yet
/// - `output_ptr` must be valid for 32 (256-bit) or 64 (512-bit) writable bytes
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn streebog_hasher_finalize(
    hasher: *mut StreebogHasher,
    output_ptr: *mut u8,
) -> i32 {
    if hasher.is_null() {
        return STREEBOG_ERR_NULL;
    }
    let hasher = Box::from_raw(hasher);
    if output_ptr.is_null() {
        return STREEBOG_ERR_NULL;
    }

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let digest = hasher.finalize();
        ptr::copy_nonoverlapping(digest.as_ptr(), output_ptr, digest.len());
    }));

    match result {
        Ok(()) => STREEBOG_OK,
        Err(_) => STREEBOG_ERR_PANIC,
    }
}

/// Free a streaming hasher without producing a digest. Null is a no-op.
///
/// # Safety
/// `hasher` must be null or come from `streebog_hasher_new` and not be freed yet.
#[no_mangle]
pub unsafe extern "C" fn streebog_hasher_free(hasher: *mut StreebogHasher) {
    if !hasher.is_null() {
        drop(Box::from_raw(hasher));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC_256: &str = "4e2919cf137ed41ec4fb6270c61826cc4fffb660341e0af3688cd0626d23b481";

    // Pointer validation is usable in const context
    const NULL_EMPTY: Option<&[u8]> = unsafe { input_slice(ptr::null(), 0) };
    const NULL_NONEMPTY: Option<&[u8]> = unsafe { input_slice(ptr::null(), 3) };

    #[test]
    fn test_input_slice_null_handling() {
        assert_eq!(NULL_EMPTY, Some(&[][..]));
        assert_eq!(NULL_NONEMPTY, None);

        let data = [1u8, 2, 3];
        let borrowed = unsafe { input_slice(data.as_ptr(), data.len()) };
        assert_eq!(borrowed, Some(&data[..]));
    }

    #[test]
    fn test_oneshot_matches_rust_api() {
        let data = b"abc";
        let mut out = [0u8; 32];
        let rc = unsafe { streebog256_hash(data.as_ptr(), data.len(), out.as_mut_ptr()) };
        assert_eq!(rc, STREEBOG_OK);
        assert_eq!(hex::encode(out), ABC_256);

        let mut out512 = [0u8; 64];
        let rc = unsafe { streebog_hash(data.as_ptr(), data.len(), 512, out512.as_mut_ptr()) };
        assert_eq!(rc, STREEBOG_OK);
        assert_eq!(out512, crate::hash512(data));
    }

    #[test]
    fn test_error_codes() {
        let mut out = [0u8; 64];
        unsafe {
            assert_eq!(
                streebog_hash(b"x".as_ptr(), 1, 384, out.as_mut_ptr()),
                STREEBOG_ERR_SIZE
            );
            assert_eq!(
                streebog_hash(ptr::null(), 5, 256, out.as_mut_ptr()),
                STREEBOG_ERR_NULL
            );
            assert_eq!(
                streebog_hash(b"x".as_ptr(), 1, 256, ptr::null_mut()),
                STREEBOG_ERR_NULL
            );
            // Null input with zero length is the empty message
            assert_eq!(
                streebog512_hash(ptr::null(), 0, out.as_mut_ptr()),
                STREEBOG_OK
            );
        }
        assert_eq!(out, crate::hash512(b""));
    }

    #[test]
    fn test_verify_codes() {
        let data = b"Secure Data";
        let mut digest = crate::hash256(data);
        unsafe {
            assert_eq!(
                streebog_verify(data.as_ptr(), data.len(), 256, digest.as_ptr()),
                1
            );
            digest[0] ^= 0xFF;
            assert_eq!(
                streebog_verify(data.as_ptr(), data.len(), 256, digest.as_ptr()),
                0
            );
            assert_eq!(
                streebog_verify(data.as_ptr(), data.len(), 256, ptr::null()),
                STREEBOG_ERR_NULL
            );
            assert_eq!(
                streebog_verify(data.as_ptr(), data.len(), 1024, digest.as_ptr()),
                STREEBOG_ERR_SIZE
            );
        }
    }

    #[test]
    fn test_streaming_handle() {
        assert!(streebog_hasher_new(128).is_null());

        let handle = streebog_hasher_new(256);
        assert!(!handle.is_null());
        let mut out = [0u8; 32];
        unsafe {
            assert_eq!(
                streebog_hasher_update(handle, b"a".as_ptr(), 1),
                STREEBOG_OK
            );
            assert_eq!(streebog_hasher_update(handle, ptr::null(), 0), STREEBOG_OK);
            assert_eq!(
                streebog_hasher_update(handle, b"bc".as_ptr(), 2),
                STREEBOG_OK
            );
            assert_eq!(
                streebog_hasher_finalize(handle, out.as_mut_ptr()),
                STREEBOG_OK
            );
        }
        assert_eq!(hex::encode(out), ABC_256);

        unsafe {
            assert_eq!(
                streebog_hasher_update(ptr::null_mut(), b"a".as_ptr(), 1),
                STREEBOG_ERR_NULL
            );
            assert_eq!(
                streebog_hasher_finalize(ptr::null_mut(), out.as_mut_ptr()),
                STREEBOG_ERR_NULL
            );
            streebog_hasher_free(ptr::null_mut());
            streebog_hasher_free(streebog_hasher_new(512));
        }
    }
}
