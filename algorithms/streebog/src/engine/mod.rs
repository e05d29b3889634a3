//! Execution Engine
//!
//! Parallel processing of independent inputs.

pub mod parallel;
