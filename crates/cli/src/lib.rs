//! Diagnostics tool for the ring partition-range algebra.
//!
//! Provides commands for:
//! - Checking which tokens a bounds contains
//! - Splitting and unwrapping bounds
//! - Normalizing sets of bounds
//! - Cutting bounds into sub-ranges for parallel scans
//! - Showing the row-space form of token bounds

pub mod commands;
pub mod config;
pub mod parse;

pub use commands::{Command, CommandResult};
pub use config::{CliConfig, OutputFormat};
