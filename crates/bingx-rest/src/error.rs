//! BingX REST API error types.

use auth::AuthError;
use rest_client::RestError;
use thiserror::Error;

/// Errors that can occur when interacting with the BingX REST API.
#[derive(Debug, Error)]
pub enum BingxRestError {
    /// Transport, protocol, or decode error from the REST layer.
    #[error("REST client error: {0}")]
    Rest(#[from] RestError),

    /// Configuration error from the credential layer.
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),
}

impl BingxRestError {
    /// Check if a surrounding resilience layer could retry this error.
    ///
    /// This core never retries; the classification is advisory.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Rest(rest_err) => rest_err.is_retryable(),
            Self::Auth(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_errors_never_retryable() {
        let err = BingxRestError::from(AuthError::MissingCredentials);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_transport_errors_retryable() {
        let err = BingxRestError::from(RestError::Timeout);
        assert!(err.is_retryable());
    }
}
