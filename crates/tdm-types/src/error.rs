//! Error types for the term-document matrix tools.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for matrix generation.
///
/// Every variant is fatal: callers propagate it to the process boundary.
#[derive(Debug, Error)]
pub enum TdmError {
    /// Filesystem operation failed
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Output directory is already present
    #[error("Output directory already exists: {}", .0.display())]
    OutputExists(PathBuf),

    /// A term-frequency line could not be parsed
    #[error("Malformed record at {}:{line}: {reason}", .path.display())]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// Directory entry name is not valid UTF-8
    #[error("File name is not valid UTF-8: {}", .0.display())]
    InvalidFileName(PathBuf),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TdmError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TdmError::Io {
            path: path.into(),
            source,
        }
    }
}
