//! Errors raised by preference store backends.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for preference store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors produced while reading or committing a namespace.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO failures while touching the namespace file.
    #[error("preference store io failure")]
    Io {
        /// Operation that triggered the failure.
        operation: &'static str,
        /// Path involved in the failure.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// The namespace file could not be parsed or serialized.
    #[error("preference store json failure")]
    Json {
        /// Operation that triggered the failure.
        operation: &'static str,
        /// Path involved in the failure.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}
