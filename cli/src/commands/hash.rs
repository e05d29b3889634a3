//! Hash Command
//!
//! File hashing, one file per Rayon task.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use streebog::{HashOutput, Hasher, Variant};

/// Read buffer per file.
const BUFFER_SIZE: usize = 128 * 1024;

/// How digest lines are printed.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum OutputStyle {
    /// `hex  path`, as produced by `sha256sum`.
    Plain,
    /// `STREEBOG256 (path) = hex`.
    Tagged,
}

/// Stream a reader through a fresh hasher.
pub fn hash_reader<R: Read>(mut reader: R, variant: Variant) -> io::Result<HashOutput> {
    let mut hasher = Hasher::new(variant);
    let mut buffer = vec![0u8; BUFFER_SIZE];

    loop {
        let n = reader.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(hasher.finalize())
}

/// Hash a path, where `-` stands for standard input.
pub fn hash_path(path: &Path, variant: Variant) -> Result<HashOutput> {
    if path.as_os_str() == "-" {
        return hash_reader(io::stdin().lock(), variant).context("Failed to read stdin");
    }
    let file = File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
    hash_reader(file, variant).with_context(|| format!("Failed to read: {}", path.display()))
}

fn format_line(digest: &HashOutput, path: &Path, style: OutputStyle) -> String {
    match style {
        OutputStyle::Plain => format!("{digest:x}  {}", path.display()),
        OutputStyle::Tagged => format!(
            "{} ({}) = {digest:x}",
            digest.variant().name().to_ascii_uppercase(),
            path.display()
        ),
    }
}

/// Hash files in parallel and print results in input order.
pub fn hash_files(files: &[PathBuf], variant: Variant, style: OutputStyle) -> Result<()> {
    tracing::debug!(count = files.len(), %variant, "hashing files");

    // Indexed collect keeps the input order
    let results: Vec<Result<HashOutput>> = files
        .par_iter()
        .map(|path| hash_path(path, variant))
        .collect();

    let mut failed = 0usize;
    for (path, result) in files.iter().zip(results) {
        match result {
            Ok(digest) => println!("{}", format_line(&digest, path, style)),
            Err(e) => {
                eprintln!("Error: {e:#}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("Failed to hash {failed} file(s)");
    }

    Ok(())
}
