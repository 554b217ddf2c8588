//! BingX API response types.
//!
//! Every endpoint answers with a `{code, msg, data}` envelope. The
//! envelope is decoded structurally and handed back to the caller as-is;
//! interpreting `code` is trading-layer policy, not transport policy.
//! Missing fields decode to their default, matching the server's habit of
//! omitting empty members.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Envelope for endpoints that return no payload
/// (cancel all orders, set leverage, set margin type).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatusResponse {
    pub code: i64,
    pub msg: String,
}

/// Response from POST /openApi/swap/v2/trade/order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaceOrderResponse {
    pub code: i64,
    pub msg: String,
    pub data: OrderAck,
}

/// Order acknowledgment payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderAck {
    pub symbol: String,
    /// Order side: BUY, SELL.
    pub side: String,
    #[serde(rename = "type")]
    pub order_type: String,
    /// Position side: LONG, SHORT.
    #[serde(rename = "positionSide")]
    pub position_side: String,
    #[serde(rename = "reduceOnly")]
    pub reduce_only: String,
    #[serde(rename = "orderId")]
    pub order_id: String,
    #[serde(rename = "workingType")]
    pub working_type: String,
    #[serde(rename = "clientOrderId")]
    pub client_order_id: String,
    #[serde(rename = "stopGuaranteed")]
    pub stop_guaranteed: String,
    /// Order status: NEW, PARTIALLY_FILLED, FILLED, CANCELED, REJECTED, EXPIRED.
    pub status: String,
    #[serde(rename = "avgPrice")]
    pub avg_price: String,
    #[serde(rename = "executedQty")]
    pub executed_qty: String,
}

/// Response from POST /openApi/swap/v2/trade/closeAllPositions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CloseAllPositionsResponse {
    pub code: i64,
    pub msg: String,
    pub data: ClosedPositions,
}

/// Outcome of a close-all-positions call.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClosedPositions {
    /// Order IDs that closed successfully.
    pub success: Vec<i64>,
    /// Failures, if any (shape varies, may be null).
    pub failed: Option<serde_json::Value>,
}

/// Response from GET /openApi/swap/v1/ticker/price.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListSymbolsResponse {
    pub code: i64,
    pub msg: String,
    pub data: Vec<TickerPrice>,
}

/// Ticker price for one trading pair.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerPrice {
    pub symbol: String,
    /// Current price (string-encoded decimal on the wire).
    #[serde(deserialize_with = "deserialize_decimal_from_str")]
    pub price: Decimal,
    /// Timestamp in milliseconds.
    pub time: i64,
}

/// Response from GET /openApi/swap/v2/quote/contracts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GetContractsResponse {
    pub code: i64,
    pub msg: String,
    pub data: Vec<Contract>,
}

/// Detailed perpetual swap contract information.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Contract {
    #[serde(rename = "contractId")]
    pub contract_id: String,
    pub symbol: String,
    #[serde(rename = "quantityPrecision")]
    pub quantity_precision: i32,
    #[serde(rename = "pricePrecision")]
    pub price_precision: i32,
    #[serde(rename = "takerFeeRate")]
    pub taker_fee_rate: f64,
    #[serde(rename = "makerFeeRate")]
    pub maker_fee_rate: f64,
    #[serde(rename = "tradeMinQuantity")]
    pub trade_min_quantity: f64,
    #[serde(rename = "tradeMinUSDT")]
    pub trade_min_usdt: f64,
    /// Quote currency (usually USDT).
    pub currency: String,
    /// Base asset (e.g. BTC, ETH).
    pub asset: String,
    /// Contract status: 0 (offline), 1 (online).
    pub status: i64,
    #[serde(rename = "apiStateOpen")]
    pub api_state_open: String,
    #[serde(rename = "apiStateClose")]
    pub api_state_close: String,
    #[serde(rename = "ensureTrigger")]
    pub ensure_trigger: bool,
    #[serde(rename = "triggerFeeRate")]
    pub trigger_fee_rate: String,
    #[serde(rename = "brokerState")]
    pub broker_state: bool,
    #[serde(rename = "launchTime")]
    pub launch_time: i64,
    #[serde(rename = "maintainTime")]
    pub maintain_time: i64,
    #[serde(rename = "offTime")]
    pub off_time: i64,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

/// Response from GET /openApi/swap/v2/server/time.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServerTimeResponse {
    pub code: i64,
    pub msg: String,
    pub data: ServerTime,
}

/// Server clock payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServerTime {
    #[serde(rename = "serverTime")]
    pub server_time: i64,
}

/// Deserialize a Decimal from a string.
fn deserialize_decimal_from_str<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: &str = Deserialize::deserialize(deserializer)?;
    s.parse::<Decimal>().map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_server_time() {
        let json = r#"{"code":0,"msg":"","data":{"serverTime":1649404670162}}"#;
        let response: ServerTimeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.code, 0);
        assert_eq!(response.data.server_time, 1649404670162);
    }

    #[test]
    fn test_deserialize_place_order_response() {
        let json = r#"{
            "code": 0,
            "msg": "",
            "data": {
                "symbol": "BTC-USDT",
                "side": "BUY",
                "type": "MARKET",
                "positionSide": "LONG",
                "reduceOnly": "false",
                "orderId": "1735950529123456789",
                "workingType": "MARK_PRICE",
                "clientOrderId": "my-order-1",
                "stopGuaranteed": "FALSE",
                "status": "NEW",
                "avgPrice": "0",
                "executedQty": "0"
            }
        }"#;

        let response: PlaceOrderResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.code, 0);
        assert_eq!(response.data.symbol, "BTC-USDT");
        assert_eq!(response.data.order_id, "1735950529123456789");
        assert_eq!(response.data.status, "NEW");
    }

    #[test]
    fn test_deserialize_status_response() {
        let json = r#"{"code":0,"msg":"success"}"#;
        let response: StatusResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.code, 0);
        assert_eq!(response.msg, "success");
    }

    #[test]
    fn test_deserialize_api_error_envelope() {
        // non-zero code still decodes structurally; interpretation is the
        // caller's concern
        let json = r#"{"code":100400,"msg":"invalid symbol"}"#;
        let response: StatusResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.code, 100400);
        assert_eq!(response.msg, "invalid symbol");
    }

    #[test]
    fn test_deserialize_ticker_prices() {
        let json = r#"{
            "code": 0,
            "msg": "",
            "data": [
                {"symbol": "BTC-USDT", "price": "42000.5", "time": 1700000000000},
                {"symbol": "ETH-USDT", "price": "2201.01", "time": 1700000000001}
            ]
        }"#;

        let response: ListSymbolsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.len(), 2);
        assert_eq!(response.data[0].symbol, "BTC-USDT");
        assert_eq!(response.data[0].price.to_string(), "42000.5");
    }

    #[test]
    fn test_deserialize_contract() {
        let json = r#"{
            "code": 0,
            "msg": "",
            "data": [{
                "contractId": "100",
                "symbol": "BTC-USDT",
                "quantityPrecision": 4,
                "pricePrecision": 2,
                "takerFeeRate": 0.0005,
                "makerFeeRate": 0.0002,
                "tradeMinQuantity": 0.0001,
                "tradeMinUSDT": 2.0,
                "currency": "USDT",
                "asset": "BTC",
                "status": 1,
                "apiStateOpen": "true",
                "apiStateClose": "true",
                "ensureTrigger": true,
                "triggerFeeRate": "0.0001",
                "brokerState": false,
                "launchTime": 1585009200000,
                "maintainTime": 0,
                "offTime": 0,
                "displayName": "BTCUSDT"
            }]
        }"#;

        let response: GetContractsResponse = serde_json::from_str(json).unwrap();
        let contract = &response.data[0];
        assert_eq!(contract.symbol, "BTC-USDT");
        assert_eq!(contract.quantity_precision, 4);
        assert_eq!(contract.taker_fee_rate, 0.0005);
        assert_eq!(contract.status, 1);
    }

    #[test]
    fn test_deserialize_close_all_positions_null_failed() {
        let json = r#"{
            "code": 0,
            "msg": "",
            "data": {"success": [173595052912, 173595052913], "failed": null}
        }"#;

        let response: CloseAllPositionsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.success.len(), 2);
        assert!(response.data.failed.is_none());
    }

    #[test]
    fn test_deserialize_envelope_without_data() {
        // the server omits empty members; missing data decodes to defaults
        let json = r#"{"code":0}"#;
        let response: PlaceOrderResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.code, 0);
        assert_eq!(response.msg, "");
        assert_eq!(response.data.order_id, "");
    }
}
