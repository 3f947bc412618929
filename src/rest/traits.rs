//! Trait definition for the Gate.io REST API client.
//!
//! [`GateIoClient`] abstracts all REST operations. This enables:
//! - Mock implementations for testing trading logic
//! - Wrapping with decorators
//! - Alternative implementations

use std::future::Future;

use rust_decimal::Decimal;

use crate::error::GateIoError;
use crate::rest::GateIoRestClient;
use crate::types::ApiResponse;

/// Trait defining all Gate.io REST API operations.
///
/// All methods are async and return the decoded JSON body unmodified.
pub trait GateIoClient: Send + Sync {
    // ========== Public Endpoints ==========

    /// List all tradable pairs.
    fn list_pairs(&self) -> impl Future<Output = Result<ApiResponse, GateIoError>> + Send;

    /// Get market info for every pair.
    fn market_info(&self) -> impl Future<Output = Result<ApiResponse, GateIoError>> + Send;

    /// Get the market list.
    fn market_list(&self) -> impl Future<Output = Result<ApiResponse, GateIoError>> + Send;

    /// Get tickers for all pairs.
    fn all_tickers(&self) -> impl Future<Output = Result<ApiResponse, GateIoError>> + Send;

    /// Get the ticker for one pair.
    fn ticker(
        &self,
        pair: &str,
    ) -> impl Future<Output = Result<ApiResponse, GateIoError>> + Send;

    /// Get the order book for one pair.
    fn order_book(
        &self,
        pair: &str,
    ) -> impl Future<Output = Result<ApiResponse, GateIoError>> + Send;

    /// Get recent public trades for one pair.
    fn trade_history(
        &self,
        pair: &str,
    ) -> impl Future<Output = Result<ApiResponse, GateIoError>> + Send;

    // ========== Private Endpoints ==========

    /// Get account balances.
    fn get_balances(&self) -> impl Future<Output = Result<ApiResponse, GateIoError>> + Send;

    /// Get all open orders.
    fn get_open_orders(&self) -> impl Future<Output = Result<ApiResponse, GateIoError>> + Send;

    /// Get the status of a single order.
    fn get_order(
        &self,
        order_number: u64,
        currency_pair: &str,
    ) -> impl Future<Output = Result<ApiResponse, GateIoError>> + Send;

    /// Place a limit buy order.
    fn buy(
        &self,
        currency_pair: &str,
        rate: Decimal,
        amount: Decimal,
    ) -> impl Future<Output = Result<ApiResponse, GateIoError>> + Send;

    /// Place a limit sell order.
    fn sell(
        &self,
        currency_pair: &str,
        rate: Decimal,
        amount: Decimal,
    ) -> impl Future<Output = Result<ApiResponse, GateIoError>> + Send;

    /// Cancel a single order.
    fn cancel_order(
        &self,
        pair: &str,
        order_id: u64,
    ) -> impl Future<Output = Result<ApiResponse, GateIoError>> + Send;

    /// Cancel every order on a pair.
    fn cancel_all_orders(
        &self,
        pair: &str,
    ) -> impl Future<Output = Result<ApiResponse, GateIoError>> + Send;

    /// Get the account's own trade history on a pair.
    fn get_trade_history(
        &self,
        pair: &str,
    ) -> impl Future<Output = Result<ApiResponse, GateIoError>> + Send;
}

impl GateIoClient for GateIoRestClient {
    async fn list_pairs(&self) -> Result<ApiResponse, GateIoError> {
        GateIoRestClient::list_pairs(self).await
    }

    async fn market_info(&self) -> Result<ApiResponse, GateIoError> {
        GateIoRestClient::market_info(self).await
    }

    async fn market_list(&self) -> Result<ApiResponse, GateIoError> {
        GateIoRestClient::market_list(self).await
    }

    async fn all_tickers(&self) -> Result<ApiResponse, GateIoError> {
        GateIoRestClient::all_tickers(self).await
    }

    async fn ticker(&self, pair: &str) -> Result<ApiResponse, GateIoError> {
        GateIoRestClient::ticker(self, pair).await
    }

    async fn order_book(&self, pair: &str) -> Result<ApiResponse, GateIoError> {
        GateIoRestClient::order_book(self, pair).await
    }

    async fn trade_history(&self, pair: &str) -> Result<ApiResponse, GateIoError> {
        GateIoRestClient::trade_history(self, pair).await
    }

    async fn get_balances(&self) -> Result<ApiResponse, GateIoError> {
        GateIoRestClient::get_balances(self).await
    }

    async fn get_open_orders(&self) -> Result<ApiResponse, GateIoError> {
        GateIoRestClient::get_open_orders(self).await
    }

    async fn get_order(
        &self,
        order_number: u64,
        currency_pair: &str,
    ) -> Result<ApiResponse, GateIoError> {
        GateIoRestClient::get_order(self, order_number, currency_pair).await
    }

    async fn buy(
        &self,
        currency_pair: &str,
        rate: Decimal,
        amount: Decimal,
    ) -> Result<ApiResponse, GateIoError> {
        GateIoRestClient::buy(self, currency_pair, rate, amount).await
    }

    async fn sell(
        &self,
        currency_pair: &str,
        rate: Decimal,
        amount: Decimal,
    ) -> Result<ApiResponse, GateIoError> {
        GateIoRestClient::sell(self, currency_pair, rate, amount).await
    }

    async fn cancel_order(&self, pair: &str, order_id: u64) -> Result<ApiResponse, GateIoError> {
        GateIoRestClient::cancel_order(self, pair, order_id).await
    }

    async fn cancel_all_orders(&self, pair: &str) -> Result<ApiResponse, GateIoError> {
        GateIoRestClient::cancel_all_orders(self, pair).await
    }

    async fn get_trade_history(&self, pair: &str) -> Result<ApiResponse, GateIoError> {
        GateIoRestClient::get_trade_history(self, pair).await
    }
}
