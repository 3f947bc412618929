//! Currency pair validation.

use crate::error::GateIoError;

/// Validate a currency pair argument such as `btc_usdt`.
///
/// The pair is placed verbatim into URL paths and signed bodies, so it must
/// be non-empty and free of characters that would change the URL shape.
pub fn validate_pair(pair: &str) -> Result<&str, GateIoError> {
    if pair.is_empty() {
        return Err(GateIoError::InvalidArgument(
            "currency pair must not be empty".to_string(),
        ));
    }
    if let Some(c) = pair
        .chars()
        .find(|c| matches!(c, '/' | '?' | '#' | '%') || c.is_whitespace() || c.is_control())
    {
        return Err(GateIoError::InvalidArgument(format!(
            "currency pair {pair:?} contains invalid character {c:?}"
        )));
    }
    Ok(pair)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_pairs() {
        assert_eq!(validate_pair("btc_usdt").unwrap(), "btc_usdt");
        assert_eq!(validate_pair("BTC_USDT").unwrap(), "BTC_USDT");
    }

    #[test]
    fn test_empty_pair_rejected() {
        let err = validate_pair("").unwrap_err();
        assert!(matches!(err, GateIoError::InvalidArgument(_)));
    }

    #[test]
    fn test_url_breaking_pairs_rejected() {
        for pair in ["btc/usdt", "btc_usdt?x=1", "btc#usdt", "btc usdt", "btc%2Fusdt"] {
            assert!(
                matches!(validate_pair(pair), Err(GateIoError::InvalidArgument(_))),
                "{pair} should be rejected"
            );
        }
    }
}
