//! Authentication module for the Gate.io API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - HMAC-SHA512 signature generation for authenticated requests

mod credentials;
mod signature;

pub use credentials::{Credentials, CredentialsProvider};
pub use signature::sign_params;
