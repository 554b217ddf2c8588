//! Typed request shapes for the BingX perpetual swap API.
//!
//! Each request converts to a [`Params`] set via its `params()` method.
//! Optional fields follow the wire convention that a zero value (empty
//! string, numeric zero) means "not provided" and is excluded from the
//! canonical string; there is no "present but zero" state.

use crate::params::Params;

/// Parameters for placing an order.
///
/// `order_type` carries the wire field `type`. `stop_loss` and
/// `take_profit` are pre-serialized JSON fragments and travel as complex
/// values (percent-encoded on the wire, verbatim in the signed string).
#[derive(Debug, Clone, Default)]
pub struct PlaceOrderRequest {
    /// Trading pair, e.g. "BTC-USDT".
    pub symbol: String,
    /// Order type: MARKET, LIMIT, STOP_MARKET, STOP, TAKE_PROFIT_MARKET,
    /// TAKE_PROFIT, TRIGGER_LIMIT, TRIGGER_MARKET.
    pub order_type: String,
    /// Order side: BUY, SELL.
    pub side: String,
    /// Position side: LONG, SHORT (required for hedge mode).
    pub position_side: String,
    /// Reduce only flag: "true", "false".
    pub reduce_only: String,
    /// Order price (required for LIMIT orders).
    pub price: f64,
    /// Order quantity.
    pub quantity: f64,
    /// Stop price for stop orders.
    pub stop_price: f64,
    /// Price rate for trailing stop orders.
    pub price_rate: f64,
    /// Stop loss parameters in JSON format.
    pub stop_loss: String,
    /// Take profit parameters in JSON format.
    pub take_profit: String,
    /// Trigger price type: MARK_PRICE, CONTRACT_PRICE.
    pub working_type: String,
    /// Custom order ID.
    pub client_order_id: String,
    /// Request validity window in milliseconds.
    pub recv_window: i64,
    /// Time in force: GTC, IOC, FOK, GTX.
    pub time_in_force: String,
    /// Close position flag: "true", "false".
    pub close_position: String,
    /// Activation price for trailing stop orders.
    pub activation_price: f64,
    /// Guaranteed stop flag: "TRUE", "FALSE".
    pub stop_guaranteed: String,
    /// Position ID for closing a specific position.
    pub position_id: i64,
}

impl PlaceOrderRequest {
    pub(crate) fn params(&self) -> Params {
        let mut params = Params::new();
        params.push_str("symbol", &self.symbol);
        params.push_str("type", &self.order_type);
        params.push_str("side", &self.side);
        params.push_str("positionSide", &self.position_side);
        params.push_str("reduceOnly", &self.reduce_only);
        params.push_float("price", self.price);
        params.push_float("quantity", self.quantity);
        params.push_float("stopPrice", self.stop_price);
        params.push_float("priceRate", self.price_rate);
        params.push_json("stopLoss", &self.stop_loss);
        params.push_json("takeProfit", &self.take_profit);
        params.push_str("workingType", &self.working_type);
        params.push_str("clientOrderId", &self.client_order_id);
        params.push_int("recvWindow", self.recv_window);
        params.push_str("timeInForce", &self.time_in_force);
        params.push_str("closePosition", &self.close_position);
        params.push_float("activationPrice", self.activation_price);
        params.push_str("stopGuaranteed", &self.stop_guaranteed);
        params.push_int("positionId", self.position_id);
        params
    }
}

/// Parameters for canceling all open orders on a symbol.
#[derive(Debug, Clone, Default)]
pub struct CancelAllOrdersRequest {
    /// Trading pair, e.g. "BTC-USDT".
    pub symbol: String,
    /// Request validity window in milliseconds.
    pub recv_window: i64,
}

impl CancelAllOrdersRequest {
    pub(crate) fn params(&self) -> Params {
        let mut params = Params::new();
        params.push_str("symbol", &self.symbol);
        params.push_int("recvWindow", self.recv_window);
        params
    }
}

/// Parameters for closing all positions on a symbol.
#[derive(Debug, Clone, Default)]
pub struct CloseAllPositionsRequest {
    /// Trading pair, e.g. "BTC-USDT".
    pub symbol: String,
    /// Request validity window in milliseconds.
    pub recv_window: i64,
}

impl CloseAllPositionsRequest {
    pub(crate) fn params(&self) -> Params {
        let mut params = Params::new();
        params.push_str("symbol", &self.symbol);
        params.push_int("recvWindow", self.recv_window);
        params
    }
}

/// Parameters for setting leverage.
#[derive(Debug, Clone, Default)]
pub struct SetLeverageRequest {
    /// Trading pair, e.g. "BTC-USDT".
    pub symbol: String,
    /// Position side: LONG, SHORT.
    pub side: String,
    /// Leverage value (1-125 depending on symbol).
    pub leverage: i64,
}

impl SetLeverageRequest {
    pub(crate) fn params(&self) -> Params {
        let mut params = Params::new();
        params.push_str("symbol", &self.symbol);
        params.push_str("side", &self.side);
        params.push_int("leverage", self.leverage);
        params
    }
}

/// Parameters for setting the margin type.
#[derive(Debug, Clone, Default)]
pub struct SetMarginTypeRequest {
    /// Trading pair, e.g. "BTC-USDT".
    pub symbol: String,
    /// CROSSED or ISOLATED.
    pub margin_type: String,
    /// Request validity window in milliseconds.
    pub recv_window: i64,
}

impl SetMarginTypeRequest {
    pub(crate) fn params(&self) -> Params {
        let mut params = Params::new();
        params.push_str("symbol", &self.symbol);
        params.push_str("marginType", &self.margin_type);
        params.push_int("recvWindow", self.recv_window);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_order_zero_fields_excluded() {
        let request = PlaceOrderRequest {
            symbol: "BTC-USDT".into(),
            order_type: "MARKET".into(),
            side: "BUY".into(),
            quantity: 0.001,
            // price left at 0.0: must not appear in the parameter set
            ..Default::default()
        };

        let params = request.params();
        let query = params.to_query(false);

        assert_eq!(query, "quantity=0.001&side=BUY&symbol=BTC-USDT&type=MARKET");
        assert!(!query.contains("price"));
        assert!(!query.contains("recvWindow"));
    }

    #[test]
    fn test_place_order_full_field_set() {
        let request = PlaceOrderRequest {
            symbol: "ETH-USDT".into(),
            order_type: "LIMIT".into(),
            side: "SELL".into(),
            position_side: "SHORT".into(),
            price: 2000.0,
            quantity: 1.5,
            time_in_force: "GTC".into(),
            client_order_id: "my-order-1".into(),
            recv_window: 5000,
            ..Default::default()
        };

        assert_eq!(
            request.params().to_query(false),
            "clientOrderId=my-order-1&positionSide=SHORT&price=2000&quantity=1.5\
             &recvWindow=5000&side=SELL&symbol=ETH-USDT&timeInForce=GTC&type=LIMIT"
        );
    }

    #[test]
    fn test_place_order_take_profit_is_complex() {
        let request = PlaceOrderRequest {
            symbol: "BTC-USDT".into(),
            order_type: "MARKET".into(),
            side: "BUY".into(),
            quantity: 0.001,
            take_profit: r#"{"type":"TAKE_PROFIT_MARKET","stopPrice":31000.5}"#.into(),
            ..Default::default()
        };

        assert!(request.params().has_complex_values());
    }

    #[test]
    fn test_cancel_all_orders_params() {
        let request = CancelAllOrdersRequest {
            symbol: "BTC-USDT".into(),
            recv_window: 0,
        };

        assert_eq!(request.params().to_query(false), "symbol=BTC-USDT");
    }

    #[test]
    fn test_set_leverage_params() {
        let request = SetLeverageRequest {
            symbol: "BTC-USDT".into(),
            side: "LONG".into(),
            leverage: 10,
        };

        assert_eq!(
            request.params().to_query(false),
            "leverage=10&side=LONG&symbol=BTC-USDT"
        );
    }

    #[test]
    fn test_set_margin_type_params() {
        let request = SetMarginTypeRequest {
            symbol: "BTC-USDT".into(),
            margin_type: "ISOLATED".into(),
            recv_window: 5000,
        };

        assert_eq!(
            request.params().to_query(false),
            "marginType=ISOLATED&recvWindow=5000&symbol=BTC-USDT"
        );
    }
}
