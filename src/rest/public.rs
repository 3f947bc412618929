//! Public REST API endpoints (no authentication required).

use crate::error::GateIoError;
use crate::rest::GateIoRestClient;
use crate::rest::endpoints::public;
use crate::types::{ApiResponse, validate_pair};

impl GateIoRestClient {
    /// List all tradable pairs.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use gateio_api_client::rest::GateIoRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = GateIoRestClient::new()?;
    ///     let pairs = client.list_pairs().await?;
    ///     for pair in pairs.as_array().into_iter().flatten() {
    ///         println!("{pair}");
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn list_pairs(&self) -> Result<ApiResponse, GateIoError> {
        self.public_get(public::PAIRS, "").await
    }

    /// Get fee, precision and minimum amount info for every market.
    pub async fn market_info(&self) -> Result<ApiResponse, GateIoError> {
        self.public_get(public::MARKET_INFO, "").await
    }

    /// Get the market list with prices and volumes.
    pub async fn market_list(&self) -> Result<ApiResponse, GateIoError> {
        self.public_get(public::MARKET_LIST, "").await
    }

    /// Get tickers for all pairs.
    pub async fn all_tickers(&self) -> Result<ApiResponse, GateIoError> {
        self.public_get(public::TICKERS, "").await
    }

    /// Get the ticker for one pair.
    ///
    /// Fails with [`GateIoError::InvalidArgument`] if `pair` is empty.
    pub async fn ticker(&self, pair: &str) -> Result<ApiResponse, GateIoError> {
        self.public_get(public::TICKER, validate_pair(pair)?).await
    }

    /// Get the order book for one pair.
    pub async fn order_book(&self, pair: &str) -> Result<ApiResponse, GateIoError> {
        self.public_get(public::ORDER_BOOK, validate_pair(pair)?).await
    }

    /// Get recent public trades for one pair.
    pub async fn trade_history(&self, pair: &str) -> Result<ApiResponse, GateIoError> {
        self.public_get(public::TRADE_HISTORY, validate_pair(pair)?).await
    }
}
