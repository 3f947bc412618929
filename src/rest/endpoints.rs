//! Gate.io v2 REST API endpoint constants.

/// Base URL for the Gate.io v2 REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.gateio.co/api2/1";

/// Public endpoints (no authentication required).
pub mod public {
    /// List tradable pairs.
    pub const PAIRS: &str = "/pairs";
    /// Market info (fees, precision, minimum amounts).
    pub const MARKET_INFO: &str = "/marketinfo";
    /// Market list with volumes.
    pub const MARKET_LIST: &str = "/marketlist";
    /// Tickers for all pairs.
    pub const TICKERS: &str = "/tickers";
    /// Ticker for one pair.
    pub const TICKER: &str = "/ticker";
    /// Order book for one pair.
    pub const ORDER_BOOK: &str = "/orderBook";
    /// Recent trades for one pair.
    pub const TRADE_HISTORY: &str = "/tradeHistory";
}

/// Private endpoints (authentication required).
pub mod private {
    /// Account balances.
    pub const BALANCES: &str = "/private/balances";
    /// Open orders.
    pub const OPEN_ORDERS: &str = "/private/openOrders";
    /// Single order status.
    pub const GET_ORDER: &str = "/private/getOrder";
    /// Place a buy order.
    pub const BUY: &str = "/private/buy";
    /// Place a sell order.
    pub const SELL: &str = "/private/sell";
    /// Cancel one order.
    pub const CANCEL_ORDER: &str = "/private/cancelOrder";
    /// Cancel every order on a pair.
    pub const CANCEL_ALL_ORDERS: &str = "/private/cancelAllOrders";
    /// Own trade history.
    pub const TRADE_HISTORY: &str = "/private/tradeHistory";
}
