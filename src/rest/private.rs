//! Private REST API endpoints (authentication required).
//!
//! These endpoints require API credentials to be configured on the client.
//! Each one declares its parameters in the exact order they are signed.

use rust_decimal::Decimal;

use crate::error::GateIoError;
use crate::rest::GateIoRestClient;
use crate::rest::endpoints::private;
use crate::types::{ApiResponse, ParamSet, validate_pair};

impl GateIoRestClient {
    /// Get account balances.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use gateio_api_client::rest::GateIoRestClient;
    /// use gateio_api_client::auth::Credentials;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(Credentials::new("key", "secret"));
    ///     let client = GateIoRestClient::builder().credentials(credentials).build()?;
    ///
    ///     let balances = client.get_balances().await?;
    ///     println!("{}", balances["available"]);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_balances(&self) -> Result<ApiResponse, GateIoError> {
        self.private_post(private::BALANCES, ParamSet::new()).await
    }

    /// Get all open orders.
    pub async fn get_open_orders(&self) -> Result<ApiResponse, GateIoError> {
        self.private_post(private::OPEN_ORDERS, ParamSet::new()).await
    }

    /// Get the status of a single order.
    pub async fn get_order(
        &self,
        order_number: u64,
        currency_pair: &str,
    ) -> Result<ApiResponse, GateIoError> {
        let params = order_ref_params(order_number, currency_pair)?;
        self.private_post(private::GET_ORDER, params).await
    }

    /// Place a limit buy order.
    pub async fn buy(
        &self,
        currency_pair: &str,
        rate: Decimal,
        amount: Decimal,
    ) -> Result<ApiResponse, GateIoError> {
        let params = limit_order_params(currency_pair, rate, amount)?;
        self.private_post(private::BUY, params).await
    }

    /// Place a limit sell order.
    pub async fn sell(
        &self,
        currency_pair: &str,
        rate: Decimal,
        amount: Decimal,
    ) -> Result<ApiResponse, GateIoError> {
        let params = limit_order_params(currency_pair, rate, amount)?;
        self.private_post(private::SELL, params).await
    }

    /// Cancel a single order.
    pub async fn cancel_order(
        &self,
        pair: &str,
        order_id: u64,
    ) -> Result<ApiResponse, GateIoError> {
        let params = order_ref_params(order_id, pair)?;
        self.private_post(private::CANCEL_ORDER, params).await
    }

    /// Cancel every order on a pair, regardless of side.
    pub async fn cancel_all_orders(&self, pair: &str) -> Result<ApiResponse, GateIoError> {
        let params = cancel_all_params(pair)?;
        self.private_post(private::CANCEL_ALL_ORDERS, params).await
    }

    /// Get the account's own trade history on a pair.
    pub async fn get_trade_history(&self, pair: &str) -> Result<ApiResponse, GateIoError> {
        let params = ParamSet::new().with("currencyPair", validate_pair(pair)?);
        self.private_post(private::TRADE_HISTORY, params).await
    }
}

/// `{orderNumber, currencyPair}`, shared by order lookup and cancellation.
fn order_ref_params(order_number: u64, pair: &str) -> Result<ParamSet, GateIoError> {
    Ok(ParamSet::new()
        .with("orderNumber", order_number)
        .with("currencyPair", validate_pair(pair)?))
}

fn limit_order_params(
    pair: &str,
    rate: Decimal,
    amount: Decimal,
) -> Result<ParamSet, GateIoError> {
    if rate <= Decimal::ZERO || amount <= Decimal::ZERO {
        return Err(GateIoError::InvalidArgument(format!(
            "rate and amount must be positive, got rate={rate} amount={amount}"
        )));
    }
    Ok(ParamSet::new()
        .with("currencyPair", validate_pair(pair)?)
        .with("rate", rate)
        .with("amount", amount))
}

// type -1 selects both sides
fn cancel_all_params(pair: &str) -> Result<ParamSet, GateIoError> {
    Ok(ParamSet::new()
        .with("type", -1_i64)
        .with("currencyPair", validate_pair(pair)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParamValue;

    #[test]
    fn test_cancel_order_params() {
        let params = order_ref_params(12345, "BTC_USDT").unwrap();
        assert_eq!(
            params.iter().collect::<Vec<_>>(),
            vec![
                ("orderNumber", &ParamValue::UInt(12345)),
                ("currencyPair", &ParamValue::Str("BTC_USDT".into())),
            ]
        );
        assert_eq!(params.signing_string(), "orderNumber=12345&currencyPair=BTC_USDT");
    }

    #[test]
    fn test_limit_order_params() {
        let params = limit_order_params("BTC_USDT", Decimal::from(100), Decimal::from(1)).unwrap();
        assert_eq!(params.signing_string(), "currencyPair=BTC_USDT&rate=100&amount=1");
    }

    #[test]
    fn test_limit_order_rejects_non_positive() {
        assert!(limit_order_params("BTC_USDT", Decimal::ZERO, Decimal::ONE).is_err());
        assert!(limit_order_params("BTC_USDT", Decimal::ONE, Decimal::NEGATIVE_ONE).is_err());
        assert!(limit_order_params("", Decimal::ONE, Decimal::ONE).is_err());
    }

    #[test]
    fn test_cancel_all_params() {
        let params = cancel_all_params("eth_usdt").unwrap();
        assert_eq!(params.signing_string(), "type=-1&currencyPair=eth_usdt");
        assert_eq!(params.to_form().unwrap(), "type=-1&currencyPair=eth_usdt");
    }
}
