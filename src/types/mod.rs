//! Common types used across the Gate.io client library.

pub mod pair;
pub mod params;

pub use pair::validate_pair;
pub use params::{ParamSet, ParamValue};

/// A decoded response body, returned to the caller unmodified.
///
/// The client imposes no schema; exchange-level error payloads arrive here
/// as well. See [`crate::error::api_error_message`].
pub type ApiResponse = serde_json::Value;
