//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// The API key or secret is empty.
    ///
    /// Raised at construction so a misconfigured client fails before
    /// any request is attempted.
    #[error("API key and secret must both be non-empty")]
    MissingCredentials,
}
