use bolero::check;
use streebog::{hash, Hasher, Variant};

#[test]
fn fuzz_streaming_consistency() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        for variant in [Variant::Streebog256, Variant::Streebog512] {
            // =================================================================
            // BASELINE (ONE-SHOT)
            // =================================================================
            let expected = hash(data, variant);

            // =================================================================
            // STREAMING VARIATIONS
            // =================================================================

            // 1. Byte-by-Byte (Small Inputs Only)
            if data.len() < 256 {
                let mut hasher = Hasher::new(variant);
                for b in data {
                    hasher.update(&[*b]);
                }
                assert_eq!(
                    hasher.finalize(),
                    expected,
                    "Byte-by-byte streaming mismatch"
                );
            }

            // 2. Arbitrary Split Points
            if data.len() > 1 {
                for split_idx in [1, data.len() / 2, data.len() - 1] {
                    let mut hasher = Hasher::new(variant);
                    let (first, second) = data.split_at(split_idx);
                    hasher.update(first);
                    hasher.update(second);
                    assert_eq!(
                        hasher.finalize(),
                        expected,
                        "Split at {split_idx} streaming mismatch"
                    );
                }
            }

            // 3. Chunk size driven by the data itself
            if let Some(&first) = data.first() {
                let chunk_size = usize::from(first) % 97 + 1;
                let mut hasher = Hasher::new(variant);
                for chunk in data.chunks(chunk_size) {
                    hasher.update(chunk);
                }
                assert_eq!(hasher.finalize(), expected, "Chunked streaming mismatch");
            }
        }
    });
}
