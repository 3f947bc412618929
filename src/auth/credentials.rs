//! Credential management for Gate.io API authentication.

use secrecy::{ExposeSecret, SecretString};

use crate::error::GateIoError;

/// Default environment variable holding the API key.
pub const API_KEY_ENV: &str = "GATEIO_API_KEY";
/// Default environment variable holding the secret key.
pub const SECRET_KEY_ENV: &str = "GATEIO_SECRET_KEY";

/// API credentials containing the key and secret.
#[derive(Clone)]
pub struct Credentials {
    /// The API key, sent verbatim in the `KEY` header
    pub api_key: String,
    /// The secret key, used only as the HMAC key
    secret_key: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret.
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: SecretString::from(secret_key.into()),
        }
    }

    /// Read credentials from `GATEIO_API_KEY` and `GATEIO_SECRET_KEY`.
    pub fn from_env() -> Result<Self, GateIoError> {
        Self::from_env_vars(API_KEY_ENV, SECRET_KEY_ENV)
    }

    /// Read credentials from custom environment variable names.
    pub fn from_env_vars(key_var: &str, secret_var: &str) -> Result<Self, GateIoError> {
        let read = |var: &str| {
            std::env::var(var)
                .map_err(|_| GateIoError::Config(format!("environment variable {var} not set")))
        };

        Ok(Self::new(read(key_var)?, read(secret_var)?))
    }

    /// Get the secret key for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

impl CredentialsProvider for Credentials {
    fn get_credentials(&self) -> &Credentials {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacted() {
        let creds = Credentials::new("my_key", "super_secret");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("my_key"));
        assert!(!debug_str.contains("super_secret"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_credentials_provider() {
        let provider = Credentials::new("key", "secret");
        let creds = provider.get_credentials();
        assert_eq!(creds.api_key, "key");
        assert_eq!(creds.expose_secret(), "secret");
    }

    #[test]
    fn test_env_credentials_missing_var() {
        let err = Credentials::from_env_vars(
            "GATEIO_TEST_SURELY_UNSET_KEY",
            "GATEIO_TEST_SURELY_UNSET_SECRET",
        )
        .unwrap_err();
        assert!(err.to_string().contains("GATEIO_TEST_SURELY_UNSET_KEY"));
    }
}
