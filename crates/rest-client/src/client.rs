//! Generic REST client wrapper around reqwest.

use crate::error::RestError;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Generic REST client for making HTTP requests.
///
/// All request parameters travel in the query string; request bodies are
/// always empty. This matches the wire format the BingX API expects for
/// every method, including state-changing POST and DELETE calls.
pub struct RestClient {
    client: Client,
    base_url: String,
}

impl RestClient {
    /// Create a new REST client with the given base URL.
    ///
    /// # Arguments
    /// * `base_url` - Base URL for all requests (e.g., "https://open-api.bingx.com")
    /// * `timeout` - Request timeout duration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RestError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RestError::Build(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a new REST client with default timeout.
    pub fn with_default_timeout(base_url: &str) -> Result<Self, RestError> {
        Self::new(base_url, DEFAULT_TIMEOUT)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a request with an empty body and deserialize the JSON response.
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Request path (e.g., "/openApi/swap/v2/server/time")
    /// * `query` - Optional query string (without leading '?')
    /// * `headers` - Optional additional headers
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Option<&str>,
        headers: Option<&[(&str, &str)]>,
    ) -> Result<T, RestError> {
        let url = self.build_url(path, query);
        tracing::debug!(method = %method, url = %url, "HTTP request");

        let mut request = self.client.request(method, &url);

        if let Some(hdrs) = headers {
            for (key, value) in hdrs {
                request = request.header(*key, *value);
            }
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Build a full URL from path and optional query string.
    fn build_url(&self, path: &str, query: Option<&str>) -> String {
        match query {
            Some(q) if !q.is_empty() => format!("{}{}?{}", self.base_url, path, q),
            _ => format!("{}{}", self.base_url, path),
        }
    }

    /// Handle HTTP response and deserialize JSON body.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, RestError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                tracing::warn!(body = %body, error = %e, "Failed to parse response");
                RestError::Decode(e.to_string())
            })
        } else {
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                return Err(RestError::RateLimited {
                    retry_after_ms: 60_000,
                });
            }

            Err(RestError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_no_query() {
        let client = RestClient::with_default_timeout("https://open-api.bingx.com").unwrap();
        assert_eq!(
            client.build_url("/openApi/swap/v2/server/time", None),
            "https://open-api.bingx.com/openApi/swap/v2/server/time"
        );
    }

    #[test]
    fn test_build_url_with_query() {
        let client = RestClient::with_default_timeout("https://open-api.bingx.com").unwrap();
        assert_eq!(
            client.build_url("/openApi/swap/v2/trade/order", Some("symbol=BTC-USDT&side=BUY")),
            "https://open-api.bingx.com/openApi/swap/v2/trade/order?symbol=BTC-USDT&side=BUY"
        );
    }

    #[test]
    fn test_build_url_strips_trailing_slash() {
        let client = RestClient::with_default_timeout("https://open-api.bingx.com/").unwrap();
        assert_eq!(
            client.build_url("/openApi/swap/v2/server/time", None),
            "https://open-api.bingx.com/openApi/swap/v2/server/time"
        );
    }

    #[test]
    fn test_build_url_empty_query() {
        let client = RestClient::with_default_timeout("https://open-api.bingx.com").unwrap();
        assert_eq!(
            client.build_url("/openApi/swap/v2/server/time", Some("")),
            "https://open-api.bingx.com/openApi/swap/v2/server/time"
        );
    }

    #[test]
    fn test_error_retryability() {
        assert!(RestError::Timeout.is_retryable());
        assert!(RestError::Connect("refused".into()).is_retryable());
        assert!(RestError::RateLimited { retry_after_ms: 1 }.is_retryable());
        assert!(!RestError::Decode("bad json".into()).is_retryable());
        assert!(!RestError::Status {
            status: 500,
            body: String::new()
        }
        .is_retryable());
    }
}
