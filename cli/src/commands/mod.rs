//! CLI Commands
//!
//! All streebog CLI commands organized as separate modules.

mod check;
mod hash;

pub use check::check_mode;
pub use hash::{hash_files, OutputStyle};
