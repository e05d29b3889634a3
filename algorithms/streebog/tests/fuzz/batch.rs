use bolero::check;
use streebog::{hash, hash_batch, Variant};

#[test]
fn fuzz_batch_consistency() {
    check!().with_type::<Vec<Vec<u8>>>().for_each(|inputs| {
        // =============================================================================
        // BATCH EXECUTION (RAYON)
        // =============================================================================
        let batch = hash_batch(inputs, Variant::Streebog256);

        // =============================================================================
        // SEQUENTIAL REFERENCE
        // =============================================================================
        assert_eq!(batch.len(), inputs.len());
        for (input, digest) in inputs.iter().zip(&batch) {
            assert_eq!(
                *digest,
                hash(input, Variant::Streebog256),
                "Batch hash mismatch (Rayon vs Sequential)"
            );
        }
    });
}
