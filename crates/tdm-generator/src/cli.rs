//! CLI argument parsing for the matrix generator.
//!
//! Exactly two positional arguments are accepted. Option flags do not count
//! toward that total.

use std::path::PathBuf;

use clap::Parser;

/// Term-document matrix generator
///
/// Reads one term-frequency file per document from INPUT_DIR and writes
/// sorted_terms.txt, sorted_documents.txt and td_matrix.txt into OUTPUT_DIR.
#[derive(Parser, Debug)]
#[command(name = "tdm-generator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default ~/.config/tdm-tools/config.toml)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Directory holding one term-frequency file per document
    pub input_dir: PathBuf,

    /// Directory to create for the output files (must not exist)
    pub output_dir: PathBuf,
}
