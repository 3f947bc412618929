//! Client configuration.

use std::time::Duration;

use crate::auth::Credentials;
use crate::error::GateIoError;
use crate::rest::DEFAULT_BASE_URL;

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "GATEIO_API_URL";
/// Environment variable holding the request timeout in seconds.
pub const TIMEOUT_ENV: &str = "GATEIO_TIMEOUT_SECS";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Immutable settings for a [`GateIoRestClient`](crate::rest::GateIoRestClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
    /// API key and secret used for private endpoints
    pub credentials: Credentials,
    /// Deadline for each request
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration from explicit values.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            credentials: Credentials::new(api_key, secret_key),
            timeout,
        }
    }

    /// Read the configuration from the environment.
    ///
    /// `GATEIO_API_KEY` and `GATEIO_SECRET_KEY` are required. `GATEIO_API_URL`
    /// and `GATEIO_TIMEOUT_SECS` fall back to their defaults when unset.
    pub fn from_env() -> Result<Self, GateIoError> {
        let credentials = Credentials::from_env()?;
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = match std::env::var(TIMEOUT_ENV) {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            base_url,
            credentials,
            timeout,
        })
    }
}

/// Parse a timeout given in (possibly fractional) seconds.
pub(crate) fn parse_timeout(raw: &str) -> Result<Duration, GateIoError> {
    let secs: f64 = raw
        .trim()
        .parse()
        .map_err(|_| GateIoError::Config(format!("invalid timeout {raw:?}")))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(GateIoError::Config(format!(
            "timeout must be a positive number of seconds, got {raw:?}"
        )));
    }
    Duration::try_from_secs_f64(secs)
        .map_err(|e| GateIoError::Config(format!("timeout {raw:?} out of range: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout("2.5").unwrap(), Duration::from_millis(2500));
        assert_eq!(parse_timeout(" 30 ").unwrap(), Duration::from_secs(30));
        assert!(parse_timeout("0").is_err());
        assert!(parse_timeout("-1").is_err());
        assert!(parse_timeout("soon").is_err());
        assert!(parse_timeout("inf").is_err());
        assert!(parse_timeout("1e30").is_err());
    }

    #[test]
    fn test_config_debug_hides_secret() {
        let config = ClientConfig::new(
            "https://example.com",
            "key",
            "very_secret",
            Duration::from_secs(5),
        );
        let debug_str = format!("{config:?}");
        assert!(!debug_str.contains("very_secret"));
        assert!(debug_str.contains("https://example.com"));
    }
}
