//! Library exports for rootpath-cli.
//!
//! The binary is a thin wrapper over these modules so that the command
//! definitions can be tested and benchmarked without spawning a process.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
