//! Gate.io REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

use crate::auth::{CredentialsProvider, sign_params};
use crate::config::{ClientConfig, DEFAULT_TIMEOUT};
use crate::error::GateIoError;
use crate::rest::endpoints::DEFAULT_BASE_URL;
use crate::types::{ApiResponse, ParamSet};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// The Gate.io REST API client.
///
/// Configuration is fixed at construction and the client holds no other
/// state, so it can be cloned and shared across tasks freely. Every call is
/// one request and one response; nothing is retried.
///
/// # Example
///
/// ```rust,no_run
/// use gateio_api_client::rest::GateIoRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public endpoints only
///     let client = GateIoRestClient::new()?;
///
///     let pairs = client.list_pairs().await?;
///     println!("Pairs: {pairs}");
///
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide credentials:
///
/// ```rust,no_run
/// use gateio_api_client::rest::GateIoRestClient;
/// use gateio_api_client::auth::Credentials;
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(Credentials::new("api_key", "secret_key"));
///     let client = GateIoRestClient::builder()
///         .credentials(credentials)
///         .timeout(Duration::from_secs(5))
///         .build()?;
///
///     let balances = client.get_balances().await?;
///     println!("Balances: {balances}");
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct GateIoRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
}

impl GateIoRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`GateIoRestClient::builder()`] to configure credentials for private endpoints.
    pub fn new() -> Result<Self, GateIoError> {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> GateIoRestClientBuilder {
        GateIoRestClientBuilder::new()
    }

    /// Create a client from a complete [`ClientConfig`].
    pub fn from_config(config: ClientConfig) -> Result<Self, GateIoError> {
        Self::builder()
            .base_url(config.base_url)
            .credentials(Arc::new(config.credentials))
            .timeout(config.timeout)
            .build()
    }

    /// The base URL endpoint paths are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a public GET request to `{base_url}{endpoint}/{param}`.
    ///
    /// The slash is always present, so endpoints without a parameter end
    /// in a trailing `/`.
    pub(crate) async fn public_get(
        &self,
        endpoint: &str,
        param: &str,
    ) -> Result<ApiResponse, GateIoError> {
        let url = format!("{}{}/{}", self.base_url, endpoint, param);
        tracing::debug!(endpoint, param, "GET");

        let response = self.http_client.get(&url).send().await?;
        self.parse_response(endpoint, response).await
    }

    /// Make a signed POST request.
    ///
    /// The signature and the form body are both derived from `params`.
    pub(crate) async fn private_post(
        &self,
        endpoint: &str,
        params: ParamSet,
    ) -> Result<ApiResponse, GateIoError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(GateIoError::MissingCredentials)?;
        let creds = credentials.get_credentials();

        let signature = sign_params(creds, &params)?;
        let form_data = params.to_form()?;
        tracing::debug!(endpoint, params = ?params.names(), "POST");

        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header("KEY", &creds.api_key)
            .header("SIGN", signature)
            .body(form_data)
            .send()
            .await?;

        self.parse_response(endpoint, response).await
    }

    /// Check the status and decode the body as JSON.
    async fn parse_response(
        &self,
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<ApiResponse, GateIoError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(endpoint, status = status.as_u16(), "Request failed");
            return Err(GateIoError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| {
            tracing::warn!(endpoint, "Failed to decode response: {}", source);
            GateIoError::Decode { source, body }
        })
    }
}

impl std::fmt::Debug for GateIoRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GateIoRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`GateIoRestClient`].
pub struct GateIoRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timeout: Duration,
    user_agent: Option<String>,
}

impl GateIoRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    ///
    /// A trailing `/` is trimmed, so `https://host/api2/1/` and
    /// `https://host/api2/1` produce the same request URLs.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<GateIoRestClient, GateIoError> {
        url::Url::parse(&self.base_url)?;
        let base_url = self.base_url.trim_end_matches('/').to_string();

        if self.timeout.is_zero() {
            return Err(GateIoError::Config("timeout must be non-zero".to_string()));
        }

        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("gateio-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .map_err(|_| GateIoError::Config(format!("invalid user agent {user_agent:?}")))?;
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()
            .map_err(|e| GateIoError::Config(format!("failed to build HTTP client: {e}")))?;

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        Ok(GateIoRestClient {
            http_client: client,
            base_url,
            credentials: self.credentials,
        })
    }
}

impl Default for GateIoRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = GateIoRestClient::builder()
            .base_url("http://localhost:8080/api2/1/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api2/1");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = GateIoRestClient::builder()
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, GateIoError::Url(_)));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = GateIoRestClient::builder()
            .timeout(Duration::ZERO)
            .build()
            .unwrap_err();
        assert!(matches!(err, GateIoError::Config(_)));
    }

    #[test]
    fn test_debug_hides_credentials() {
        let client = GateIoRestClient::builder()
            .credentials(Arc::new(Credentials::new("key", "hidden_secret")))
            .build()
            .unwrap();
        let debug_str = format!("{client:?}");
        assert!(debug_str.contains("has_credentials: true"));
        assert!(!debug_str.contains("hidden_secret"));
    }
}
