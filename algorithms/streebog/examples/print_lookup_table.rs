//! Lookup Table Printer
//!
//! Dumps the precomputed linear-transformation table as Rust source, for
//! comparison against other implementations that ship it as a literal.

#![allow(clippy::pedantic, clippy::nursery)]

use streebog::kernels::tables::LINEAR_TABLE;

fn main() {
    println!("pub const LINEAR_TABLE: [[u64; 256]; 8] = [");
    for row in &LINEAR_TABLE {
        println!("    [");
        for line in row.chunks(4) {
            let words: Vec<String> = line.iter().map(|w| format!("0x{w:016x}")).collect();
            println!("        {},", words.join(", "));
        }
        println!("    ],");
    }
    println!("];");
}
