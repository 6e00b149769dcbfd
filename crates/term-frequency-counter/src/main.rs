//! Term frequency counter.
//!
//! Reads text from stdin, splits it on whitespace and prints one
//! `"<token> <count>"` line per distinct token, sorted by token.
//! The output is the per-document input format of `tdm-generator`.
//!
//! # Usage
//!
//! ```bash
//! echo "a b a c b a" | term-frequency-counter
//! ```

use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use tdm_core::{count_tokens, write_frequencies};
use tdm_types::Settings;

/// Count whitespace-delimited tokens on stdin.
#[derive(Parser, Debug)]
#[command(name = "term-frequency-counter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config file (overrides default ~/.config/tdm-tools/config.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,
}

/// Install a stderr subscriber so stdout carries only counts.
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())
        .and_then(|s| s.with_log_level(cli.log_level.as_deref()))
        .context("Failed to load configuration")?;
    init_logging(&settings.log_level)?;

    let freqs = count_tokens(io::stdin().lock()).context("Failed to read stdin")?;
    debug!(distinct = freqs.len(), "Counted tokens");

    let stdout = io::stdout();
    write_frequencies(&freqs, BufWriter::new(stdout.lock())).context("Failed to write output")?;
    Ok(())
}
