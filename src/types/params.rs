//! Ordered request parameters.
//!
//! The same [`ParamSet`] produces both the signature input and the form body,
//! so nothing can be added or dropped between signing and sending.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::GateIoError;

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Text value, sent as-is
    Str(String),
    /// Signed integer
    Int(i64),
    /// Unsigned integer (order numbers)
    UInt(u64),
    /// Decimal number, rendered with its original scale
    Decimal(Decimal),
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::Int(n) => write!(f, "{n}"),
            ParamValue::UInt(n) => write!(f, "{n}"),
            ParamValue::Decimal(d) => write!(f, "{d}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::UInt(value)
    }
}

impl From<Decimal> for ParamValue {
    fn from(value: Decimal) -> Self {
        ParamValue::Decimal(value)
    }
}

/// An ordered list of `(name, value)` pairs.
///
/// Insertion order is preserved and is significant: the server recomputes
/// the signature over the parameters in the order they were declared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParamSet {
    entries: Vec<(&'static str, ParamValue)>,
}

impl ParamSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter, builder style.
    pub fn with(mut self, name: &'static str, value: impl Into<ParamValue>) -> Self {
        self.push(name, value);
        self
    }

    /// Append a parameter.
    pub fn push(&mut self, name: &'static str, value: impl Into<ParamValue>) {
        self.entries.push((name, value.into()));
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the parameters in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ParamValue)> + '_ {
        self.entries.iter().map(|(name, value)| (*name, value))
    }

    /// Look up a parameter value by name.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// Parameter names in declared order.
    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|(name, _)| name).collect()
    }

    /// The message that gets signed: `k1=v1&k2=v2&...`, values unencoded.
    ///
    /// An empty set yields an empty string.
    pub fn signing_string(&self) -> String {
        let mut message = String::new();
        for (name, value) in self.iter() {
            message.push_str(name);
            message.push('=');
            message.push_str(&value.to_string());
            message.push('&');
        }
        message.pop();
        message
    }

    /// The `application/x-www-form-urlencoded` request body.
    pub fn to_form(&self) -> Result<String, GateIoError> {
        serde_urlencoded::to_string(self)
            .map_err(|e| GateIoError::InvalidArgument(format!("cannot encode parameters: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signing_string_keeps_declared_order() {
        let params = ParamSet::new()
            .with("currencyPair", "BTC_USDT")
            .with("rate", "100")
            .with("amount", "1");
        assert_eq!(
            params.signing_string(),
            "currencyPair=BTC_USDT&rate=100&amount=1"
        );
        assert_eq!(params.names(), vec!["currencyPair", "rate", "amount"]);
    }

    #[test]
    fn test_signing_string_numbers() {
        let params = ParamSet::new()
            .with("type", -1_i64)
            .with("currencyPair", "eth_usdt");
        assert_eq!(params.signing_string(), "type=-1&currencyPair=eth_usdt");

        let params = ParamSet::new()
            .with("orderNumber", 12345_u64)
            .with("currencyPair", "BTC_USDT");
        assert_eq!(
            params.signing_string(),
            "orderNumber=12345&currencyPair=BTC_USDT"
        );
    }

    #[test]
    fn test_empty_set() {
        let params = ParamSet::new();
        assert!(params.is_empty());
        assert_eq!(params.signing_string(), "");
        assert_eq!(params.to_form().unwrap(), "");
    }

    #[test]
    fn test_form_body_encodes_same_entries() {
        let params = ParamSet::new()
            .with("currencyPair", "btc_usdt")
            .with("rate", Decimal::new(10050, 2))
            .with("note", "a b&c");
        assert_eq!(
            params.to_form().unwrap(),
            "currencyPair=btc_usdt&rate=100.50&note=a+b%26c"
        );
        // The signed message carries the raw value.
        assert_eq!(
            params.signing_string(),
            "currencyPair=btc_usdt&rate=100.50&note=a b&c"
        );
    }

    #[test]
    fn test_get() {
        let params = ParamSet::new()
            .with("orderNumber", 7_u64)
            .with("currencyPair", "ltc_btc");
        assert_eq!(params.get("orderNumber"), Some(&ParamValue::UInt(7)));
        assert_eq!(params.get("missing"), None);
        assert_eq!(params.len(), 2);
    }
}
