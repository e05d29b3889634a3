//! Streebog Basic Example
//!
//! Minimal usage: `let digest = streebog::hash512(&data);`

#![allow(clippy::pedantic, clippy::nursery)]

use streebog::{Hasher, Variant};

fn main() {
    let data = b"Hello, World!";

    println!("Data:        {:?}", String::from_utf8_lossy(data));
    println!("Streebog256: {}", hex::encode(streebog::hash256(data)));
    println!("Streebog512: {}", hex::encode(streebog::hash512(data)));

    // Same digest, fed in pieces
    let mut hasher = Hasher::new(Variant::Streebog256);
    hasher.update(b"Hello, ");
    hasher.update(b"World!");
    println!("Streamed:    {:x}", hasher.finalize());
}
