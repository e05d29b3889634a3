//! Generator for Streebog test vectors
//!
//! Generates the canonical JSON test vectors used by `tests/test_vectors.json`.
//! Includes the GOST control examples, empty input and block boundaries.
#![allow(clippy::unwrap_used)]
use serde_json::{json, Value};

fn vector(name: &str, input_label: &str, data: &[u8]) -> Value {
    json!({
        "name": name,
        "input": input_label,
        "hash256": hex::encode(streebog::hash256(data)),
        "hash512": hex::encode(streebog::hash512(data)),
    })
}

fn main() {
    let mut vectors = Vec::new();

    // =========================================================================
    // 1. GOST CONTROL EXAMPLES
    // =========================================================================

    let m1 = "012345678901234567890123456789012345678901234567890123456789012";
    vectors.push(vector("gost_m1", m1, m1.as_bytes()));

    // Second example is CP1251 text, stored as hex
    let m2 = hex::decode(
        "d1e520e2e5f2f0e82c20d1f2f0e8e1eee6e820e2edf3f6e82c20e2e5fef2fa20f120ec\
         eef0ff20f1f2f0e5ebe0ece820ede020f5f0e0e1f0fbff20efebfaeafb20c8e3eef0e5e2fb",
    )
    .unwrap();
    vectors.push(vector(
        "gost_m2_cp1251",
        &format!("HEX:{}", hex::encode(&m2)),
        &m2,
    ));

    // =========================================================================
    // 2. BASIC VECTORS
    // =========================================================================

    vectors.push(vector("empty", "", b""));
    vectors.push(vector("basic", "abc", b"abc"));
    let fox = "The quick brown fox jumps over the lazy dog";
    vectors.push(vector("fox", fox, fox.as_bytes()));

    // =========================================================================
    // 3. BOUNDARY CONDITIONS
    // =========================================================================

    vectors.push(vector("exact_block_64", "EXACT_64_ZERO", &[0x00u8; 64]));
    vectors.push(vector("unaligned_63", "UNALIGNED_63_TWO", &[0x02u8; 63]));
    vectors.push(vector("unaligned_65", "UNALIGNED_65_THREE", &[0x03u8; 65]));
    vectors.push(vector("exact_block_512", "EXACT_512_ONE", &[0x01u8; 512]));
    vectors.push(vector("large", "LARGE_1KB", &[0x41u8; 1024]));

    // All-ones blocks exercise carries in the checksum
    vectors.push(vector("all_ff_128", "FF_128", &[0xFFu8; 128]));

    // =========================================================================
    // 4. EXTREME INPUTS
    // =========================================================================

    vectors.push(vector("huge", "HUGE_1MB", &vec![0x41u8; 1024 * 1024]));

    let output = json!({ "vectors": vectors });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
