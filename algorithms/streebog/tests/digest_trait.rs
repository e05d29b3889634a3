//! Tests for the `digest` trait integration.
#![cfg(feature = "digest-trait")]
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Verifies that `Streebog256` and `Streebog512` implement the `Digest` trait
//! correctly and can be used in generic contexts.

use streebog::digest::{Digest, FixedOutputReset};
use streebog::{Streebog256, Streebog512};

fn hash_generic<D: Digest>(input: &[u8]) -> Vec<u8> {
    let mut h = D::new();
    h.update(input);
    h.finalize().to_vec()
}

fn hash_twice_with_reset<D: Digest + FixedOutputReset>(input: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let mut h = D::new();
    Digest::update(&mut h, input);
    let first = Digest::finalize_reset(&mut h).to_vec();
    Digest::update(&mut h, input);
    (first, Digest::finalize(h).to_vec())
}

#[test]
fn test_digest_trait_usage() {
    // 1. Standard Usage (Direct)
    let mut hasher = Streebog256::new();
    hasher.update(b"test");
    let res1 = hasher.finalize();

    // 2. Generic Usage (via Trait)
    let res2 = hash_generic::<Streebog256>(b"test");
    assert_eq!(res1.as_slice(), res2.as_slice());

    let res3 = hash_generic::<Streebog512>(b"test");
    assert_eq!(res3.as_slice(), streebog::hash512(b"test").as_slice());
}

#[test]
fn test_digest_output_sizes() {
    assert_eq!(<Streebog256 as Digest>::output_size(), 32);
    assert_eq!(<Streebog512 as Digest>::output_size(), 64);
}

#[test]
fn test_digest_oneshot_helper() {
    let out = <Streebog512 as Digest>::digest(b"abc");
    assert_eq!(
        hex::encode(out),
        "28156e28317da7c98f4fe2bed6b542d0dab85bb224445fcedaf75d46e26d7eb8\
         d5997f3e0915dd6b7f0aab08d9c8beb0d8c64bae2ab8b3c8c6bc53b3bf0db728"
    );
}

#[test]
fn test_finalize_reset_via_trait() {
    let (first, second) = hash_twice_with_reset::<Streebog256>(b"reset me");
    assert_eq!(first, second);
    assert_eq!(first.as_slice(), streebog::hash256(b"reset me").as_slice());
}

#[test]
fn test_chain_update() {
    let out = Streebog256::new()
        .chain_update(b"ab")
        .chain_update(b"c")
        .finalize();
    assert_eq!(out.as_slice(), streebog::hash256(b"abc").as_slice());
}
