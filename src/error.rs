//! Error types for the qmd2html library.
//!
//! The text pipeline itself is total: every stage maps any string to a
//! string and never returns an error. [`QmdError`] only covers the
//! file-facing wrappers ([`crate::convert::convert_file`],
//! [`crate::convert::convert_to_file`]) and configuration validation.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the qmd2html library.
#[derive(Debug, Error)]
pub enum QmdError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("QMD file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// Any other failure while reading the input (including invalid UTF-8).
    #[error("Failed to read '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Output errors ─────────────────────────────────────────────────────
    /// Could not create or write the output HTML file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl QmdError {
    /// Classify an I/O error raised while reading `path`.
    pub(crate) fn from_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => QmdError::FileNotFound { path },
            std::io::ErrorKind::PermissionDenied => QmdError::PermissionDenied { path },
            _ => QmdError::ReadFailed { path, source },
        }
    }
}
