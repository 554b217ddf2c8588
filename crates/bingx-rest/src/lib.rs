//! BingX perpetual swap REST API client.
//!
//! This crate provides a typed client for the BingX perpetual swap API
//! with:
//!
//! - **Canonical parameter encoding**: deterministic, sorted `key=value`
//!   serialization with the venue's selective percent-encoding policy
//! - **Request signing**: HMAC-SHA256 over the unencoded canonical string
//! - **Time synchronization**: adjusts for clock skew between local and
//!   server time
//! - **Typed endpoints**: orders, leverage, margin type, symbols, contracts
//! - **Error handling**: configuration, transport, protocol, and decode
//!   failures surfaced as distinct variants; no retries built in
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::ApiCredentials;
//! use bingx_rest::{BingxRestClient, PlaceOrderRequest};
//!
//! // Load credentials from environment
//! let credentials = ApiCredentials::from_env()?;
//! let client = BingxRestClient::new(credentials)?;
//!
//! // Sync time with the BingX server
//! client.sync_time().await?;
//!
//! // Place a market order
//! let response = client
//!     .place_order(PlaceOrderRequest {
//!         symbol: "BTC-USDT".into(),
//!         order_type: "MARKET".into(),
//!         side: "BUY".into(),
//!         quantity: 0.001,
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

mod client;
pub mod constants;
mod environment;
mod error;
mod params;
mod requests;
mod responses;

pub use client::BingxRestClient;
pub use environment::BingxEnvironment;
pub use error::BingxRestError;
pub use params::{ParamValue, Params};
pub use requests::{
    CancelAllOrdersRequest, CloseAllPositionsRequest, PlaceOrderRequest, SetLeverageRequest,
    SetMarginTypeRequest,
};
pub use responses::{
    CloseAllPositionsResponse, ClosedPositions, Contract, GetContractsResponse,
    ListSymbolsResponse, OrderAck, PlaceOrderResponse, ServerTime, ServerTimeResponse,
    StatusResponse, TickerPrice,
};
