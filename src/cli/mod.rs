//! Command-line surface of the `docsync` binary.

pub mod commands;
pub mod handlers;

pub use commands::{CliArgs, Commands};
