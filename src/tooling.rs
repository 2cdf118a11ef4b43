//! Tooling & Integration Layer
//!
//! Command-line surface over the environment merger.

pub mod cli;

pub use cli::{apply_overrides, Cli, CliContext, Commands};
