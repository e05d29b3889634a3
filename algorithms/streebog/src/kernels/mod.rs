//! Streebog Kernels
//!
//! Table-driven software implementation of the GOST R 34.11-2012 primitives,
//! compression function and finalization.

pub mod compress;
pub mod constants;
pub mod finalize;
pub mod state;
pub mod tables;
pub mod transforms;
