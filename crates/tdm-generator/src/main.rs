//! Term-Document Matrix Generator
//!
//! Builds a dense term-document matrix from a directory of per-document
//! term-frequency files (the output format of `term-frequency-counter`).
//!
//! # Usage
//!
//! ```bash
//! tdm-generator [--config PATH] [--log-level LEVEL] <INPUT_DIR> <OUTPUT_DIR>
//! ```
//!
//! Exits 1 on a wrong argument count. Any filesystem or parse error is fatal
//! and also exits non-zero.

use std::process;

use anyhow::Result;
use clap::Parser;

use tdm_generator::{run, Cli, USAGE_EXIT_CODE};

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version are reported through the same path
            let code = if err.use_stderr() { USAGE_EXIT_CODE } else { 0 };
            let _ = err.print();
            process::exit(code);
        }
    };

    run(cli)
}
