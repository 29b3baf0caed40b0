//! Error types for synchronization.

use thiserror::Error;

/// Errors that can occur while applying a status change.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// No row carries the given task id.
    #[error("task row not found: {0}")]
    RowNotFound(String),

    /// The task id was empty.
    #[error("empty task id")]
    EmptyTaskId,
}

/// Result type alias for synchronization operations.
pub type Result<T> = std::result::Result<T, SyncError>;
