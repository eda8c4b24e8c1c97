//! Client error types.

use thiserror::Error;

use sbmctl_core::messaging::{ApiError, BatchError};

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Bad, missing, or conflicting flags. Fails before any file or
    /// network I/O.
    #[error("{0}")]
    Usage(String),

    /// Unparseable input file. Fails before any record is sent.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Batch(#[from] BatchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Process exit code for this error: 2 for usage errors, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            ClientError::Usage(_) => 2,
            _ => 1,
        }
    }
}
