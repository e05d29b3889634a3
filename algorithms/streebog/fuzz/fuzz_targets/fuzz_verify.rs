#![no_main]

use libfuzzer_sys::fuzz_target;
use streebog::Variant;

fuzz_target!(|data: &[u8]| {
    let digest = streebog::hash512(data);
    assert!(streebog::verify512(data, &digest));

    // Any single-bit corruption of the digest must be rejected
    let mut corrupted = digest;
    let bit = data.len() % (corrupted.len() * 8);
    corrupted[bit / 8] ^= 1 << (bit % 8);
    assert!(!streebog::verify512(data, &corrupted));

    // A digest of the wrong size never verifies
    assert!(!streebog::verify(data, Variant::Streebog256, &digest));
});
