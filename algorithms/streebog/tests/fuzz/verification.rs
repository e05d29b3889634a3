use bolero::check;
use streebog::{hash256, hash512, verify, verify256, verify512, Variant};

#[test]
fn fuzz_verification_logic() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // POSITIVE TEST
        // =============================================================================

        let h256 = hash256(data);
        let h512 = hash512(data);
        assert!(verify256(data, &h256), "verify256() failed on correct data");
        assert!(verify512(data, &h512), "verify512() failed on correct data");
        assert!(verify(data, Variant::Streebog512, &h512));

        // =============================================================================
        // NEGATIVE TESTS (CORRUPTION)
        // =============================================================================

        // 1. Data Corruption
        if !data.is_empty() {
            let mut corrupted_data = data.clone();
            corrupted_data[0] ^= 0x01;
            assert!(
                !verify256(&corrupted_data, &h256),
                "verify256() succeeded on corrupted data"
            );
        }

        // 2. Hash Corruption
        let mut bad_h = h512;
        bad_h[63] ^= 0x80;
        assert!(
            !verify512(data, &bad_h),
            "verify512() succeeded on corrupted hash"
        );

        // 3. Size Confusion
        assert!(!verify(data, Variant::Streebog256, &h512));
    });
}
