//! HMAC-SHA512 signature generation for Gate.io API authentication.
//!
//! Private endpoints require a signature computed as:
//! ```text
//! hex(HMAC-SHA512(secret_key, "k1=v1&k2=v2&...&kn=vn"))
//! ```
//!
//! The parameters are joined in their declared order with raw (not
//! url-encoded) values. The signature is sent in the `SIGN` header.

use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::auth::Credentials;
use crate::error::GateIoError;
use crate::types::ParamSet;

type HmacSha512 = Hmac<Sha512>;

/// Sign a parameter set for Gate.io's private API.
///
/// Returns the lower-case hex encoding of the 64-byte digest.
///
/// # Example
///
/// ```rust
/// use gateio_api_client::auth::{Credentials, sign_params};
/// use gateio_api_client::ParamSet;
///
/// let credentials = Credentials::new("api_key", "secret");
/// let params = ParamSet::new()
///     .with("orderNumber", 12345_u64)
///     .with("currencyPair", "btc_usdt");
/// let signature = sign_params(&credentials, &params)?;
/// assert_eq!(signature.len(), 128);
/// # Ok::<(), gateio_api_client::GateIoError>(())
/// ```
pub fn sign_params(credentials: &Credentials, params: &ParamSet) -> Result<String, GateIoError> {
    sign_message(credentials.expose_secret(), &params.signing_string())
}

fn sign_message(secret: &str, message: &str) -> Result<String, GateIoError> {
    let mut hmac = HmacSha512::new_from_slice(secret.as_bytes())
        .map_err(|e| GateIoError::Config(format!("Invalid HMAC key: {e}")))?;
    hmac.update(message.as_bytes());
    Ok(hex::encode(hmac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    // RFC 4231 test case 2.
    #[test]
    fn test_rfc4231_vector() {
        let signature = sign_message("Jefe", "what do ya want for nothing?").unwrap();
        assert_eq!(
            signature,
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
             9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    #[test]
    fn test_signature_over_joined_params() {
        let credentials = Credentials::new("key", "my_secret");
        let params = ParamSet::new()
            .with("currencyPair", "BTC_USDT")
            .with("rate", "100")
            .with("amount", "1");

        assert_eq!(
            sign_params(&credentials, &params).unwrap(),
            sign_message("my_secret", "currencyPair=BTC_USDT&rate=100&amount=1").unwrap()
        );
    }

    #[test]
    fn test_signature_consistency() {
        let credentials = Credentials::new("key", "my_secret");
        let params = ParamSet::new()
            .with("orderNumber", 12345_u64)
            .with("currencyPair", "BTC_USDT");

        let sig1 = sign_params(&credentials, &params).unwrap();
        let sig2 = sign_params(&credentials, &params).unwrap();

        assert_eq!(sig1, sig2);
        assert_eq!(sig1.len(), 128);
        assert!(sig1.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_signature_depends_on_order() {
        let credentials = Credentials::new("key", "my_secret");
        let forward = ParamSet::new()
            .with("type", -1_i64)
            .with("currencyPair", "eth_usdt");
        let reversed = ParamSet::new()
            .with("currencyPair", "eth_usdt")
            .with("type", -1_i64);

        assert_ne!(
            sign_params(&credentials, &forward).unwrap(),
            sign_params(&credentials, &reversed).unwrap()
        );
    }

    #[test]
    fn test_decimal_values_sign_as_written() {
        let credentials = Credentials::new("key", "my_secret");
        let params = ParamSet::new()
            .with("currencyPair", "eth_btc")
            .with("rate", "0.0500".parse::<Decimal>().unwrap())
            .with("amount", Decimal::new(25, 1));

        assert_eq!(
            sign_params(&credentials, &params).unwrap(),
            sign_message("my_secret", "currencyPair=eth_btc&rate=0.0500&amount=2.5").unwrap()
        );
    }

    #[test]
    fn test_empty_params_sign_empty_message() {
        let credentials = Credentials::new("key", "my_secret");
        assert_eq!(
            sign_params(&credentials, &ParamSet::new()).unwrap(),
            sign_message("my_secret", "").unwrap()
        );
    }
}
