//! Error types for board snapshot storage.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing a board snapshot.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Failed to read a file.
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file.
    #[error("failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot is not valid JSON.
    #[error("invalid board snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for board storage.
pub type Result<T> = std::result::Result<T, BoardError>;
