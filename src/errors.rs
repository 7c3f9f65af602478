/// Error types for the country fetch boundary.
use thiserror::Error;

/// Failure while fetching the country list. One variant per transport
/// failure kind, so log entries name the cause even though the public
/// fetch contract degrades every kind to an empty result.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error occurred: {detail}")]
    HttpStatus { status: u16, detail: String },

    #[error("Connection error occurred: {0}")]
    Connection(String),

    #[error("Timeout error occurred: {0}")]
    Timeout(String),

    #[error("Malformed response body: {0}")]
    Decode(String),

    #[error("An error occurred: {0}")]
    Request(String),
}

impl FetchError {
    /// Classify a `reqwest` error into the taxonomy above.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(err.to_string())
        } else if err.is_connect() {
            FetchError::Connection(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::HttpStatus {
                status: status.as_u16(),
                detail: err.to_string(),
            }
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Request(err.to_string())
        }
    }
}

/// Result type alias for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;
