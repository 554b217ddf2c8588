//! Generic REST client infrastructure.
//!
//! This crate provides a thin wrapper around `reqwest` with:
//!
//! - Consistent error handling via `RestError`
//! - A single query-string request entry point for any HTTP method
//! - JSON response deserialization
//! - Header injection for authentication
//! - Rate limit detection (classification only, no retries)
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_client::{Method, RestClient};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct TimeResponse {
//!     code: i64,
//! }
//!
//! let client = RestClient::with_default_timeout("https://open-api.bingx.com")?;
//! let time: TimeResponse = client
//!     .request(Method::GET, "/openApi/swap/v2/server/time", None, None)
//!     .await?;
//! ```

mod client;
mod error;

pub use client::RestClient;
pub use error::RestError;
pub use reqwest::Method;
