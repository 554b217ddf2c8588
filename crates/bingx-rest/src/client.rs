//! BingX perpetual swap REST API client.

use crate::constants::API_KEY_HEADER;
use crate::environment::BingxEnvironment;
use crate::error::BingxRestError;
use crate::params::Params;
use crate::requests::{
    CancelAllOrdersRequest, CloseAllPositionsRequest, PlaceOrderRequest, SetLeverageRequest,
    SetMarginTypeRequest,
};
use crate::responses::{
    CloseAllPositionsResponse, GetContractsResponse, ListSymbolsResponse, PlaceOrderResponse,
    ServerTimeResponse, StatusResponse,
};
use auth::{ApiCredentials, RequestSigner};
use rest_client::{Method, RestClient};
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

/// Request timeout for BingX API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// BingX REST API client with request signing.
///
/// Immutable after construction: credentials, base URL, and the transport
/// handle are read-only, so one instance can be shared by reference
/// across concurrent tasks without coordination.
pub struct BingxRestClient {
    client: RestClient,
    credentials: ApiCredentials,
    environment: BingxEnvironment,
    /// Time offset between local clock and BingX server (local - server).
    time_offset_ms: AtomicI64,
}

impl BingxRestClient {
    /// Create a new BingX REST client for production.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(credentials: ApiCredentials) -> Result<Self, BingxRestError> {
        Self::with_environment(credentials, BingxEnvironment::Production)
    }

    /// Create a new BingX REST client for a specific environment.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_environment(
        credentials: ApiCredentials,
        environment: BingxEnvironment,
    ) -> Result<Self, BingxRestError> {
        let client = RestClient::new(environment.rest_base_url(), REQUEST_TIMEOUT)?;

        Ok(Self {
            client,
            credentials,
            environment,
            time_offset_ms: AtomicI64::new(0),
        })
    }

    /// Get the environment this client is connected to.
    pub fn environment(&self) -> BingxEnvironment {
        self.environment
    }

    /// Get the API key (for logging/debugging).
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Get the current server timestamp adjusted for time offset.
    ///
    /// This is the millisecond epoch value injected into every signed
    /// request. Until [`sync_time`](Self::sync_time) runs the offset is
    /// zero and this is simply the local clock.
    pub fn server_timestamp_ms(&self) -> i64 {
        let local_time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_millis() as i64;

        local_time - self.time_offset_ms.load(Ordering::Relaxed)
    }

    // ========================================================================
    // Time Synchronization
    // ========================================================================

    /// Synchronize with BingX server time.
    ///
    /// GET /openApi/swap/v2/server/time
    ///
    /// Calculates the offset between the local clock and the server clock.
    /// Should be called on startup and again if timestamps start being
    /// rejected.
    pub async fn sync_time(&self) -> Result<(), BingxRestError> {
        let before = std::time::Instant::now();
        let response: ServerTimeResponse = self
            .client
            .request(Method::GET, "/openApi/swap/v2/server/time", None, None)
            .await?;
        let rtt = before.elapsed().as_millis() as i64;

        let local_time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_millis() as i64;

        // Estimate server time at midpoint of request
        let estimated_server_time = response.data.server_time + (rtt / 2);
        let offset = local_time - estimated_server_time;

        self.time_offset_ms.store(offset, Ordering::Relaxed);

        tracing::info!(
            server_time = response.data.server_time,
            local_time = local_time,
            offset_ms = offset,
            rtt_ms = rtt,
            "Time synchronized with BingX server"
        );

        Ok(())
    }

    // ========================================================================
    // Trading
    // ========================================================================

    /// Place a new order.
    ///
    /// POST /openApi/swap/v2/trade/order
    pub async fn place_order(
        &self,
        request: PlaceOrderRequest,
    ) -> Result<PlaceOrderResponse, BingxRestError> {
        tracing::info!(
            symbol = %request.symbol,
            side = %request.side,
            order_type = %request.order_type,
            quantity = request.quantity,
            client_order_id = %request.client_order_id,
            "Placing order"
        );

        let response: PlaceOrderResponse = self
            .send_signed(
                Method::POST,
                "/openApi/swap/v2/trade/order",
                request.params(),
            )
            .await?;

        tracing::info!(
            order_id = %response.data.order_id,
            status = %response.data.status,
            "Order placed"
        );

        Ok(response)
    }

    /// Cancel all open orders for a symbol.
    ///
    /// DELETE /openApi/swap/v2/trade/allOpenOrders
    pub async fn cancel_all_orders(
        &self,
        request: CancelAllOrdersRequest,
    ) -> Result<StatusResponse, BingxRestError> {
        tracing::info!(symbol = %request.symbol, "Canceling all orders");

        self.send_signed(
            Method::DELETE,
            "/openApi/swap/v2/trade/allOpenOrders",
            request.params(),
        )
        .await
    }

    /// Close all positions for a symbol.
    ///
    /// POST /openApi/swap/v2/trade/closeAllPositions
    pub async fn close_all_positions(
        &self,
        request: CloseAllPositionsRequest,
    ) -> Result<CloseAllPositionsResponse, BingxRestError> {
        tracing::info!(symbol = %request.symbol, "Closing all positions");

        let response: CloseAllPositionsResponse = self
            .send_signed(
                Method::POST,
                "/openApi/swap/v2/trade/closeAllPositions",
                request.params(),
            )
            .await?;

        tracing::info!(
            closed = response.data.success.len(),
            "Close all positions completed"
        );

        Ok(response)
    }

    /// Set the leverage for a symbol and side.
    ///
    /// POST /openApi/swap/v2/trade/leverage
    pub async fn set_leverage(
        &self,
        request: SetLeverageRequest,
    ) -> Result<StatusResponse, BingxRestError> {
        tracing::info!(
            symbol = %request.symbol,
            side = %request.side,
            leverage = request.leverage,
            "Setting leverage"
        );

        self.send_signed(
            Method::POST,
            "/openApi/swap/v2/trade/leverage",
            request.params(),
        )
        .await
    }

    /// Set the margin type (CROSSED or ISOLATED) for a symbol.
    ///
    /// POST /openApi/swap/v2/trade/marginType
    pub async fn set_margin_type(
        &self,
        request: SetMarginTypeRequest,
    ) -> Result<StatusResponse, BingxRestError> {
        tracing::info!(
            symbol = %request.symbol,
            margin_type = %request.margin_type,
            "Setting margin type"
        );

        self.send_signed(
            Method::POST,
            "/openApi/swap/v2/trade/marginType",
            request.params(),
        )
        .await
    }

    // ========================================================================
    // Market Data
    // ========================================================================

    /// Retrieve the list of available trading symbols with their prices.
    ///
    /// GET /openApi/swap/v1/ticker/price
    pub async fn list_symbols(&self) -> Result<ListSymbolsResponse, BingxRestError> {
        self.send_signed(Method::GET, "/openApi/swap/v1/ticker/price", Params::new())
            .await
    }

    /// Retrieve detailed information about all perpetual swap contracts.
    ///
    /// GET /openApi/swap/v2/quote/contracts
    pub async fn get_contracts(&self) -> Result<GetContractsResponse, BingxRestError> {
        self.send_signed(
            Method::GET,
            "/openApi/swap/v2/quote/contracts",
            Params::new(),
        )
        .await
    }

    // ========================================================================
    // Request Assembly
    // ========================================================================

    /// Dispatch a signed request.
    ///
    /// Injects the timestamp, signs the unencoded canonical string,
    /// switches to the encoded serialization for transmission when the
    /// set carries a complex value, appends the signature, and sends the
    /// call with the API key header and an empty body.
    async fn send_signed<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: Params,
    ) -> Result<T, BingxRestError> {
        let signer = RequestSigner::new(&self.credentials);
        let timestamp = self.server_timestamp_ms();
        let query = Self::build_signed_query(&signer, params, timestamp);

        let headers = [(API_KEY_HEADER, self.credentials.api_key())];

        let response = self
            .client
            .request(method, path, Some(&query), Some(&headers))
            .await?;

        Ok(response)
    }

    /// Assemble the final query string for one request.
    ///
    /// The signature is computed over the *unencoded* canonical string.
    /// The transmitted string may differ, but only in the percent-encoding
    /// of complex values; the server strips that encoding before it
    /// recomputes the signature, so both sides sign the same bytes.
    /// The signature is always the last query parameter.
    fn build_signed_query(
        signer: &RequestSigner<'_>,
        mut params: Params,
        timestamp_ms: i64,
    ) -> String {
        params.push_int("timestamp", timestamp_ms);

        let unencoded = params.to_query(false);
        let signature = signer.sign(&unencoded);

        let transmitted = if params.has_complex_values() {
            params.to_query(true)
        } else {
            unencoded
        };

        format!("{transmitted}&signature={signature}")
    }
}

impl std::fmt::Debug for BingxRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BingxRestClient")
            .field("environment", &self.environment)
            .field("base_url", &self.client.base_url())
            .field("api_key", &self.credentials.api_key())
            .field(
                "time_offset_ms",
                &self.time_offset_ms.load(Ordering::Relaxed),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_signer_creds() -> ApiCredentials {
        ApiCredentials::new("test-api-key".into(), "s3cr3t".into()).unwrap()
    }

    #[test]
    fn test_build_signed_query_golden() {
        let creds = test_signer_creds();
        let signer = RequestSigner::new(&creds);

        let mut params = Params::new();
        params.push_str("symbol", "BTC-USDT");

        let query = BingxRestClient::build_signed_query(&signer, params, 1_700_000_000_000);

        assert_eq!(
            query,
            "symbol=BTC-USDT&timestamp=1700000000000\
             &signature=1b6fe3bf9023571c440bafe04dfbb5c032537306917b1eda723654fae0ef1a4f"
        );
    }

    #[test]
    fn test_signature_is_last_parameter() {
        let creds = test_signer_creds();
        let signer = RequestSigner::new(&creds);

        let mut params = Params::new();
        params.push_str("zebra", "1");
        params.push_str("alpha", "2");

        let query = BingxRestClient::build_signed_query(&signer, params, 1_700_000_000_000);

        let signature_pos = query.find("&signature=").unwrap();
        assert_eq!(
            &query[..signature_pos],
            "alpha=2&timestamp=1700000000000&zebra=1"
        );
        assert_eq!(query.len(), signature_pos + "&signature=".len() + 64);
    }

    #[test]
    fn test_complex_value_signed_unencoded_sent_encoded() {
        let creds = test_signer_creds();
        let signer = RequestSigner::new(&creds);

        let mut params = Params::new();
        params.push_float("quantity", 0.001);
        params.push_str("side", "BUY");
        params.push_str("symbol", "BTC-USDT");
        params.push_str("type", "MARKET");
        params.push_json(
            "takeProfit",
            r#"{"type":"TAKE_PROFIT_MARKET","stopPrice":31000.5,"workingType":"MARK_PRICE"}"#,
        );

        let query = BingxRestClient::build_signed_query(&signer, params, 1_700_000_000_000);

        // transmitted form carries the percent-encoded fragment
        assert!(query.contains(
            "takeProfit=%7B%22type%22%3A%22TAKE_PROFIT_MARKET%22%2C%22stopPrice%22\
             %3A31000.5%2C%22workingType%22%3A%22MARK_PRICE%22%7D"
        ));
        assert!(!query.contains('{'));

        // but the signature was computed over the raw, unencoded string
        assert!(query.ends_with(
            "&signature=80e287747fe5d69ab12895d76eaf0c17ca0a7358ea091a2e4cb2e2439406e7a2"
        ));
    }

    #[test]
    fn test_client_debug_omits_secret() {
        let creds = test_signer_creds();
        let client = BingxRestClient::new(creds).unwrap();
        let debug_str = format!("{:?}", client);

        assert!(debug_str.contains("test-api-key"));
        assert!(!debug_str.contains("s3cr3t"));
    }
}
