//! HTTP client
//!
//! Thin wrapper over `reqwest` that normalizes failures into [`HttpError`]
//! and applies the configured timeouts and user agent to every request.

use crate::retry::Retryable;
use std::time::Duration;
use thiserror::Error;

/// HTTP error types
#[derive(Debug, Error)]
pub enum HttpError {
    /// Connection or protocol failure
    #[error("transport error: {0}")]
    Transport(String),

    /// The request exceeded its timeout
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-success status
    #[error("unexpected status: {code}")]
    Status {
        /// HTTP status code
        code: u16,
    },

    /// The request URL could not be used
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl Retryable for HttpError {
    fn is_transient(&self) -> bool {
        match self {
            HttpError::Transport(_) | HttpError::Timeout => true,
            HttpError::Status { code } => *code >= 500,
            HttpError::InvalidUrl(_) => false,
        }
    }
}

/// Result type for HTTP operations
pub type Result<T> = std::result::Result<T, HttpError>;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Total per-request timeout
    pub timeout: Duration,
    /// Connection establishment timeout
    pub connect_timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: "prism-ui".to_string(),
        }
    }
}

impl HttpConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connection timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the User-Agent header
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }
}

/// HTTP client with connection pooling
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a new client from configuration
    pub fn new(config: HttpConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| HttpError::Transport(e.to_string()))?;

        Ok(Self { client })
    }

    /// Fetch the body of a URL as raw bytes
    ///
    /// Non-success statuses are errors; redirects are followed by the
    /// underlying client.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!(url, "GET");

        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url, code = status.as_u16(), "non-success status");
            return Err(HttpError::Status { code: status.as_u16() });
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        Ok(bytes.to_vec())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> HttpError {
    if err.is_timeout() {
        HttpError::Timeout
    } else if err.is_builder() {
        HttpError::InvalidUrl(err.to_string())
    } else {
        HttpError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = HttpConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.user_agent, "prism-ui");
    }

    #[test]
    fn test_config_builder() {
        let config = HttpConfig::new()
            .timeout(Duration::from_secs(5))
            .connect_timeout(Duration::from_secs(2))
            .user_agent("prism-ui-tests");

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
        assert_eq!(config.user_agent, "prism-ui-tests");
    }

    #[test]
    fn test_client_builds_from_config() {
        assert!(HttpClient::new(HttpConfig::default()).is_ok());
    }

    #[test]
    fn test_error_transience() {
        assert!(HttpError::Timeout.is_transient());
        assert!(HttpError::Transport("reset".into()).is_transient());
        assert!(HttpError::Status { code: 503 }.is_transient());
        assert!(!HttpError::Status { code: 404 }.is_transient());
        assert!(!HttpError::InvalidUrl("nope".into()).is_transient());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(HttpError::Status { code: 404 }.to_string(), "unexpected status: 404");
        assert_eq!(HttpError::Timeout.to_string(), "request timed out");
    }
}
