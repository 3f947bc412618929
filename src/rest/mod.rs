//! Gate.io REST API client.
//!
//! Public market-data endpoints are plain GET requests with the pair as a
//! trailing path segment. Private endpoints are signed POST requests with a
//! form-encoded body.
//!
//! # Trait-based API
//!
//! The [`GateIoClient`] trait abstracts all REST operations so callers can
//! swap in mocks or decorators:
//!
//! ```rust,ignore
//! use gateio_api_client::rest::GateIoClient;
//!
//! async fn spread<C: GateIoClient>(client: &C) -> gateio_api_client::Result<()> {
//!     let book = client.order_book("btc_usdt").await?;
//!     println!("{}", book["asks"]);
//!     Ok(())
//! }
//! ```

mod client;
pub mod endpoints;
mod private;
mod public;
mod traits;

pub use client::{GateIoRestClient, GateIoRestClientBuilder};
pub use endpoints::DEFAULT_BASE_URL;
pub use traits::GateIoClient;
