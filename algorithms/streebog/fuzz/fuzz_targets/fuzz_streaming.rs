#![no_main]

use libfuzzer_sys::fuzz_target;
use streebog::{Hasher, Variant};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First byte selects the digest size, second byte the chunk size (1 to 255)
    let variant = if data[0] & 1 == 0 {
        Variant::Streebog256
    } else {
        Variant::Streebog512
    };
    let chunk_size = (data[1] as usize % 255) + 1;
    let message = &data[2..];

    let reference_hash = streebog::hash(message, variant);

    let mut hasher = Hasher::new(variant);
    for chunk in message.chunks(chunk_size) {
        hasher.update(chunk);
    }

    // They must be identical
    assert_eq!(
        reference_hash,
        hasher.finalize(),
        "Streaming and One-Shot approaches differ!"
    );
});
