//! Term-document matrix generator library exports.
//!
//! # Modules
//!
//! - `cli`: Command-line argument parsing with clap
//! - `commands`: Command implementation (configuration, logging, generation)

pub mod cli;
pub mod commands;

pub use cli::Cli;
pub use commands::{init_logging, run, USAGE_EXIT_CODE};
