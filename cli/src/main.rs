//! Streebog CLI
//!
//! GOST R 34.11-2012 checksum command-line tool.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check_mode, hash_files, OutputStyle};
use std::path::PathBuf;
use streebog::Variant;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "streebog")]
#[command(about = "Streebog (GOST R 34.11-2012) checksums", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to hash (if no subcommand); `-` reads standard input
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Digest size in bits (256 or 512)
    #[arg(short, long, default_value = "256", value_parser = parse_variant)]
    bits: Variant,

    /// Print BSD-style tagged lines: `STREEBOG256 (file) = hex`
    #[arg(long)]
    tag: bool,

    /// Verbose diagnostics on stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify checksums from file (like sha256sum -c)
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
}

fn parse_variant(s: &str) -> Result<Variant, String> {
    s.parse::<Variant>().map_err(|e| e.to_string())
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn init_logging(verbose: bool) {
    let default = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Some(Commands::Check { checksum_file }) => check_mode(checksum_file)?,
        None => {
            if cli.files.is_empty() {
                eprintln!("Error: No files specified");
                eprintln!("Usage: streebog [FILE]... or streebog --help");
                std::process::exit(1);
            }

            let style = if cli.tag {
                OutputStyle::Tagged
            } else {
                OutputStyle::Plain
            };
            hash_files(&cli.files, cli.bits, style)?;
        }
    }

    Ok(())
}
