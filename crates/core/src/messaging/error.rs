use thiserror::Error;

/// Errors surfaced by the remote messaging-service boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Server returned {status}: {body}")]
    Remote { status: u16, body: String },
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for remote API operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Errors raised by the batch operator itself.
///
/// Per-record failures never appear here; they are recorded in the
/// `BatchResult` and the batch continues. These errors cover operator
/// misconfiguration and failures before the per-record loop starts.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("no records found in input")]
    EmptyInput,
    #[error("could not resolve target records: {0}")]
    Resolve(#[from] ApiError),
    #[error("aborted by user")]
    Aborted,
    #[error("confirmation prompt failed: {0}")]
    Prompt(#[from] std::io::Error),
}
