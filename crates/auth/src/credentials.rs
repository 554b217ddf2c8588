//! Secure API credential management.
//!
//! Uses the `secrecy` crate to prevent accidental logging of secret keys
//! and ensures memory is zeroed on drop.

use crate::error::AuthError;
use secrecy::{ExposeSecret, SecretString};

/// API credentials for authenticated requests.
///
/// The secret key is wrapped in `SecretString` which:
/// - Prevents accidental Debug/Display printing
/// - Zeros memory on drop via zeroize
#[derive(Clone)]
pub struct ApiCredentials {
    api_key: String,
    secret_key: SecretString,
}

impl ApiCredentials {
    /// Load credentials from environment variables.
    ///
    /// Looks for:
    /// - `BINGX_API_KEY` - The API key (public)
    /// - `BINGX_SECRET_KEY` - The secret key (private)
    ///
    /// # Errors
    /// Returns `AuthError::MissingEnvVar` if either variable is not set,
    /// or `AuthError::MissingCredentials` if either is set but empty.
    pub fn from_env() -> Result<Self, AuthError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        let api_key = std::env::var("BINGX_API_KEY")
            .map_err(|_| AuthError::MissingEnvVar("BINGX_API_KEY".into()))?;

        let secret_key = std::env::var("BINGX_SECRET_KEY")
            .map_err(|_| AuthError::MissingEnvVar("BINGX_SECRET_KEY".into()))?;

        Self::new(api_key, secret_key)
    }

    /// Create credentials from explicit values.
    ///
    /// The key is sent as a request header; the secret is only ever used
    /// as the HMAC key and is never transmitted.
    ///
    /// # Errors
    /// Returns `AuthError::MissingCredentials` if either value is empty.
    pub fn new(api_key: String, secret_key: String) -> Result<Self, AuthError> {
        if api_key.is_empty() || secret_key.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        Ok(Self {
            api_key,
            secret_key: SecretString::from(secret_key),
        })
    }

    /// Get the API key (public, safe to log).
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Expose the secret key for signing.
    ///
    /// **WARNING**: Only use this for cryptographic operations.
    /// Never log or display the return value.
    pub fn expose_secret(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.api_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}
