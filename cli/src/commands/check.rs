//! Check Command
//!
//! Verify checksums from file (like sha256sum -c). The digest size of each
//! line follows from its hex length.

use super::hash::hash_path;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use streebog::Variant;

// =============================================================================
// PARSING
// =============================================================================

/// One parsed line of a checksum file.
#[derive(Debug, PartialEq, Eq)]
struct Entry<'a> {
    variant: Variant,
    expected: Vec<u8>,
    path: &'a str,
}

fn variant_for_hex(hex_digest: &str) -> Option<Variant> {
    match hex_digest.len() {
        64 => Some(Variant::Streebog256),
        128 => Some(Variant::Streebog512),
        _ => None,
    }
}

/// Parse `hex  path` or `STREEBOGnnn (path) = hex`.
fn parse_line(line: &str) -> Option<Entry<'_>> {
    let (hex_digest, path, tagged) = match line.split_once("  ") {
        Some((hex_digest, path)) if !line.starts_with("STREEBOG") => (hex_digest, path, None),
        _ => {
            let (tag, rest) = line.split_once(" (")?;
            let (path, hex_digest) = rest.rsplit_once(") = ")?;
            (hex_digest, path, Some(tag.parse::<Variant>().ok()?))
        }
    };

    let variant = variant_for_hex(hex_digest.trim())?;
    if tagged.is_some_and(|v| v != variant) {
        return None;
    }
    let expected = hex::decode(hex_digest.trim()).ok()?;

    Some(Entry {
        variant,
        expected,
        path: path.trim(),
    })
}

// =============================================================================
// CHECK
// =============================================================================

/// Hash the entry's file and compare it with the expected digest in constant time.
fn check_entry(entry: &Entry<'_>) -> Result<bool> {
    let actual = hash_path(Path::new(entry.path), entry.variant)?;
    Ok(actual == *entry.expected.as_slice())
}

/// Verify checksums from a checksum file.
pub fn check_mode(checksum_file: &Path) -> Result<()> {
    let file = File::open(checksum_file)
        .with_context(|| format!("Failed to open: {}", checksum_file.display()))?;

    let reader = BufReader::new(file);
    let mut total = 0;
    let mut failed = 0;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some(entry) = parse_line(line) else {
            tracing::warn!(line, "skipping malformed checksum line");
            eprintln!("Warning: Invalid format: {line}");
            continue;
        };
        total += 1;

        match check_entry(&entry) {
            Ok(true) => {
                println!("{}: OK", entry.path);
            }
            Ok(false) => {
                println!("{}: FAILED", entry.path);
                failed += 1;
            }
            Err(e) => {
                println!("{}: FAILED ({e:#})", entry.path);
                failed += 1;
            }
        }
    }

    println!();
    if failed == 0 {
        println!("All {total} checksums verified");
    } else {
        eprintln!("WARNING: {failed} of {total} checksums did NOT match");
        std::process::exit(1);
    }

    Ok(())
}
