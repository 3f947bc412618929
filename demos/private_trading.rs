//! Example: Private account and trading endpoints.
//!
//! Reads `GATEIO_API_KEY`, `GATEIO_SECRET_KEY` and optionally
//! `GATEIO_API_URL` / `GATEIO_TIMEOUT_SECS` from the environment or a `.env`
//! file.
//!
//! Run with: cargo run --example private_trading

use std::env;

use gateio_api_client::ClientConfig;
use gateio_api_client::error::api_error_message;
use gateio_api_client::rest::GateIoRestClient;
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("{e}. Set GATEIO_API_KEY and GATEIO_SECRET_KEY to run this example.");
            return Ok(());
        }
    };
    let client = GateIoRestClient::from_config(config)?;

    let balances = client.get_balances().await?;
    if let Some(message) = api_error_message(&balances) {
        println!("Exchange rejected the request: {message}");
        return Ok(());
    }
    println!("Available: {}", balances["available"]);

    let orders = client.get_open_orders().await?;
    println!("Open orders: {}", orders["orders"]);

    // Only place an order when explicitly asked to.
    if let Ok(rate) = env::var("GATEIO_DEMO_BUY_RATE") {
        let rate: Decimal = rate.parse()?;
        let result = client
            .buy("btc_usdt", rate, Decimal::new(1, 3))
            .await?;
        println!("Buy result: {result}");

        if let Some(order_number) = result["orderNumber"].as_u64() {
            let cancelled = client.cancel_order("btc_usdt", order_number).await?;
            println!("Cancel result: {cancelled}");
        }
    } else {
        println!("Set GATEIO_DEMO_BUY_RATE to place (and cancel) a small buy order.");
    }

    let history = client.get_trade_history("btc_usdt").await?;
    println!("Trade history: {history}");

    Ok(())
}
