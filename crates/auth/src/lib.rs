//! Authentication and signing for the BingX API.
//!
//! This crate provides secure credential management and request signing
//! for authenticated API calls to the BingX perpetual swap exchange.
//!
//! # Features
//!
//! - **Secure Credentials**: API secrets are wrapped in `SecretString` to prevent
//!   accidental logging and ensure memory is zeroed on drop.
//! - **HMAC-SHA256 Signing**: Implements the signing algorithm required by BingX.
//! - **Environment Loading**: Credentials can be loaded from environment variables
//!   or a `.env` file.
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::{ApiCredentials, RequestSigner};
//!
//! // Load credentials from environment
//! let credentials = ApiCredentials::from_env()?;
//!
//! // Create a signer
//! let signer = RequestSigner::new(&credentials);
//!
//! // Sign a canonical query string
//! let signature = signer.sign("symbol=BTC-USDT&timestamp=1700000000000");
//! ```

mod credentials;
mod error;
mod signer;

pub use credentials::ApiCredentials;
pub use error::AuthError;
pub use signer::RequestSigner;
