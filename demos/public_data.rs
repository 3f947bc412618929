//! Example: Fetching public market data from Gate.io.
//!
//! This example demonstrates how to use the REST API to fetch publicly
//! available market data without authentication.
//!
//! Run with: cargo run --example public_data

use gateio_api_client::rest::GateIoRestClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Create a client for public endpoints (no credentials needed)
    let client = GateIoRestClient::new()?;

    println!("=== Pairs ===");
    let pairs = client.list_pairs().await?;
    for pair in pairs.as_array().into_iter().flatten().take(5) {
        println!("{pair}");
    }

    println!("\n=== Ticker: btc_usdt ===");
    let ticker = client.ticker("btc_usdt").await?;
    println!("Last: {}", ticker["last"]);
    println!("Ask/Bid: {} / {}", ticker["lowestAsk"], ticker["highestBid"]);

    println!("\n=== Order Book: btc_usdt ===");
    let book = client.order_book("btc_usdt").await?;
    for ask in book["asks"].as_array().into_iter().flatten().rev().take(3) {
        println!("ask {ask}");
    }
    for bid in book["bids"].as_array().into_iter().flatten().take(3) {
        println!("bid {bid}");
    }

    println!("\n=== Recent Trades: btc_usdt ===");
    let trades = client.trade_history("btc_usdt").await?;
    for trade in trades["data"].as_array().into_iter().flatten().take(5) {
        println!("{} {} @ {}", trade["type"], trade["amount"], trade["rate"]);
    }

    Ok(())
}
