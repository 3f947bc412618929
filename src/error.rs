//! Error types for the Gate.io client library.

use thiserror::Error;

/// The main error type for all Gate.io client operations.
///
/// Exchange-level failures reported inside a successful JSON body are not
/// errors here; they come back as ordinary [`ApiResponse`](crate::ApiResponse)
/// values. See [`api_error_message`] for a way to inspect them.
#[derive(Error, Debug)]
pub enum GateIoError {
    /// A caller-supplied argument was rejected before any request was sent
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Network-level failure (connection refused, TLS, middleware)
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest_middleware::Error),

    /// Request timeout
    #[error("Request timed out")]
    Timeout,

    /// The server answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The response body is not valid JSON
    #[error("Failed to decode response: {source}. Body: {body}")]
    Decode {
        /// Underlying JSON error
        source: serde_json::Error,
        /// Raw response body
        body: String,
    },

    /// Missing required credentials
    #[error("Missing credentials: API key and secret required for private endpoints")]
    MissingCredentials,

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),
}

impl GateIoError {
    /// Check if this error happened at the transport level.
    ///
    /// Timeouts and non-2xx statuses count as transport failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout | Self::HttpStatus { .. })
    }

    /// Check if this is a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Check if this is a JSON decoding failure.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// HTTP status code, if the server sent one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GateIoError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(reqwest_middleware::Error::Reqwest(err))
        }
    }
}

impl From<reqwest_middleware::Error> for GateIoError {
    fn from(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(inner) => inner.into(),
            other => Self::Transport(other),
        }
    }
}

/// Extract the exchange-level error message from a decoded response.
///
/// Gate.io reports failures as `{"result": "false", "code": .., "message": ..}`
/// with HTTP 200. Returns `None` when the body does not look like a failure.
pub fn api_error_message(response: &serde_json::Value) -> Option<String> {
    let failed = match response.get("result")? {
        serde_json::Value::String(s) => s == "false",
        serde_json::Value::Bool(b) => !b,
        _ => false,
    };
    if !failed {
        return None;
    }

    let message = response
        .get("message")
        .and_then(|m| m.as_str())
        .unwrap_or("unknown error");
    match response.get("code") {
        Some(code) => Some(format!("{code}: {message}")),
        None => Some(message.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transport_classification() {
        let status = GateIoError::HttpStatus {
            status: 500,
            body: "oops".into(),
        };
        assert!(status.is_transport());
        assert_eq!(status.status(), Some(500));
        assert!(GateIoError::Timeout.is_transport());
        assert!(!GateIoError::InvalidArgument("pair".into()).is_transport());
    }

    #[test]
    fn test_api_error_message() {
        let body = json!({"result": "false", "code": 21, "message": "Error: invalid pair"});
        assert_eq!(
            api_error_message(&body).as_deref(),
            Some("21: Error: invalid pair")
        );

        let ok = json!({"result": "true", "available": {}});
        assert!(api_error_message(&ok).is_none());

        let list = json!(["btc_usdt", "eth_usdt"]);
        assert!(api_error_message(&list).is_none());
    }
}
