//! Command implementations for the matrix generator.

use anyhow::{Context, Result};
use tracing::info;

use tdm_core::generate;
use tdm_types::Settings;

use crate::cli::Cli;

/// Process exit status for argument errors.
pub const USAGE_EXIT_CODE: i32 = 1;

/// Load settings, install logging and build the matrix.
pub fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())
        .and_then(|s| s.with_log_level(cli.log_level.as_deref()))
        .context("Failed to load configuration")?;

    init_logging(&settings.log_level)?;

    let summary = generate(&cli.input_dir, &cli.output_dir).with_context(|| {
        format!(
            "Failed to build term-document matrix from {}",
            cli.input_dir.display()
        )
    })?;

    info!(
        terms = summary.num_terms,
        documents = summary.num_documents,
        nonzero = summary.nonzero_cells,
        "Done"
    );
    Ok(())
}

/// Install a stderr subscriber; `RUST_LOG` takes precedence over `log_level`.
pub fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}
