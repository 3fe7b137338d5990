//! Event log query and export error types.

use thiserror::Error;

/// Errors that can occur while querying an event log channel or exporting
/// the result.
#[derive(Debug, Error)]
pub enum WinlogError {
    #[error("query tool not found: {0}")]
    ToolNotFound(String),

    #[error("query tool failed: {0}")]
    ToolFailed(String),

    #[error("could not launch {program}: {message}")]
    Spawn { program: String, message: String },

    #[error("query tool timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("filesystem error: {0}")]
    Filesystem(String),
}

/// Convenience alias for event log results.
pub type WinlogResult<T> = Result<T, WinlogError>;
