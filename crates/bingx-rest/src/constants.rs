//! BingX perpetual swap API string constants.

/// Header carrying the API key on every authenticated request.
pub const API_KEY_HEADER: &str = "X-BX-APIKEY";

/// Order types.
pub const ORDER_TYPE_MARKET: &str = "MARKET";
pub const ORDER_TYPE_LIMIT: &str = "LIMIT";
pub const ORDER_TYPE_STOP_MARKET: &str = "STOP_MARKET";
pub const ORDER_TYPE_STOP: &str = "STOP";
pub const ORDER_TYPE_TAKE_PROFIT_MARKET: &str = "TAKE_PROFIT_MARKET";
pub const ORDER_TYPE_TAKE_PROFIT: &str = "TAKE_PROFIT";
pub const ORDER_TYPE_TRIGGER_LIMIT: &str = "TRIGGER_LIMIT";
pub const ORDER_TYPE_TRIGGER_MARKET: &str = "TRIGGER_MARKET";

/// Order sides.
pub const SIDE_BUY: &str = "BUY";
pub const SIDE_SELL: &str = "SELL";

/// Position sides (required for hedge mode).
pub const POSITION_SIDE_LONG: &str = "LONG";
pub const POSITION_SIDE_SHORT: &str = "SHORT";

/// Trigger price types. `MARK_PRICE` is recommended to prevent
/// manipulation via the last traded price.
pub const WORKING_TYPE_MARK_PRICE: &str = "MARK_PRICE";
pub const WORKING_TYPE_CONTRACT_PRICE: &str = "CONTRACT_PRICE";

/// Time in force options.
pub const TIME_IN_FORCE_GTC: &str = "GTC";
pub const TIME_IN_FORCE_IOC: &str = "IOC";
pub const TIME_IN_FORCE_FOK: &str = "FOK";
pub const TIME_IN_FORCE_GTX: &str = "GTX";

/// Order statuses.
pub const ORDER_STATUS_NEW: &str = "NEW";
pub const ORDER_STATUS_PARTIALLY_FILLED: &str = "PARTIALLY_FILLED";
pub const ORDER_STATUS_FILLED: &str = "FILLED";
pub const ORDER_STATUS_CANCELED: &str = "CANCELED";
pub const ORDER_STATUS_REJECTED: &str = "REJECTED";
pub const ORDER_STATUS_EXPIRED: &str = "EXPIRED";

/// Margin types.
pub const MARGIN_TYPE_CROSSED: &str = "CROSSED";
pub const MARGIN_TYPE_ISOLATED: &str = "ISOLATED";

/// Contract statuses.
pub const CONTRACT_STATUS_OFFLINE: i64 = 0;
pub const CONTRACT_STATUS_ONLINE: i64 = 1;

/// Boolean flags carried as strings (e.g. `reduceOnly`).
pub const BOOL_TRUE: &str = "true";
pub const BOOL_FALSE: &str = "false";

/// Guaranteed-stop flag values (uppercase, unlike the other flags).
pub const STOP_GUARANTEED_TRUE: &str = "TRUE";
pub const STOP_GUARANTEED_FALSE: &str = "FALSE";
