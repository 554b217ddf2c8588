//! REST transport error types.

use thiserror::Error;

/// Errors that can occur during REST API calls.
///
/// The variants separate the three failure stages of a call: the request
/// never completing (`Timeout`/`Connect`/`Build`), the server answering
/// with a non-success status (`Status`), and a successful response whose
/// body could not be decoded (`Decode`).
#[derive(Debug, Error)]
pub enum RestError {
    /// Non-success HTTP status, with the raw response body attached
    /// for diagnosis.
    #[error("HTTP status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Request timed out.
    #[error("Request timeout")]
    Timeout,

    /// Connection error (network issue).
    #[error("Connection error: {0}")]
    Connect(String),

    /// Transport succeeded but the body was not the expected JSON shape.
    #[error("Response decode error: {0}")]
    Decode(String),

    /// Rate limited by the server. Classification only: no retry is
    /// performed here, callers decide whether to back off.
    #[error("Rate limited, retry after {retry_after_ms}ms")]
    RateLimited {
        /// Suggested wait time before retrying.
        retry_after_ms: u64,
    },

    /// Failed to build the HTTP client or request.
    #[error("Request build error: {0}")]
    Build(String),
}

impl RestError {
    /// Check if a surrounding resilience layer could retry this error.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            RestError::Timeout | RestError::Connect(_) | RestError::RateLimited { .. }
        )
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, RestError::RateLimited { .. })
    }
}

impl From<reqwest::Error> for RestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RestError::Timeout
        } else if err.is_connect() {
            RestError::Connect(err.to_string())
        } else if err.is_decode() {
            RestError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            RestError::Status {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            RestError::Connect(err.to_string())
        }
    }
}
