//! # Gate.io Client
//!
//! An async Rust client library for the Gate.io v2 REST API.
//!
//! ## Features
//!
//! - Public market data: pairs, market info, tickers, order books, trade history
//! - Private trading: balances, order placement, cancellation, trade history
//! - HMAC-SHA512 request signing over an explicitly ordered parameter set
//! - Responses are passed through as raw JSON, numbers included
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gateio_api_client::rest::GateIoRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GateIoRestClient::new()?;
//!     let ticker = client.ticker("btc_usdt").await?;
//!     println!("Ticker: {ticker}");
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use config::ClientConfig;
pub use error::GateIoError;
pub use types::{ApiResponse, ParamSet, ParamValue};

/// Result type alias using GateIoError
pub type Result<T> = std::result::Result<T, GateIoError>;
