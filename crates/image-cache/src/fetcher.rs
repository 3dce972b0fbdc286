//! The byte-fetching seam
//!
//! The cache talks to the network through [`ImageFetcher`], so tests and
//! alternative transports can be injected. [`HttpImageFetcher`] is the
//! production implementation: the shared [`networking::HttpClient`] with the
//! crate's retry policy wrapped around each request.

use async_trait::async_trait;
use networking::{with_retry, HttpClient, HttpConfig, RetryPolicy};
use thiserror::Error;

/// Fetch failure classification
///
/// Cloneable so one in-flight result can fan out to every subscriber.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Transport-level failure; a caller-initiated retry may succeed
    #[error("network error: {0}")]
    Network(String),

    /// The fetched bytes are not a decodable image
    #[error("decode error: {0}")]
    Decode(String),

    /// The operation was abandoned before completing
    #[error("fetch cancelled")]
    Cancelled,
}

/// Fetches raw image bytes for a locator
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Fetch the bytes behind a locator
    async fn fetch_bytes(&self, locator: &str) -> Result<Vec<u8>, FetchError>;
}

/// HTTP-backed fetcher with retry
pub struct HttpImageFetcher {
    client: HttpClient,
    retry: RetryPolicy,
}

impl HttpImageFetcher {
    /// Create a fetcher with default client and retry settings
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(HttpConfig::default(), RetryPolicy::default())
    }

    /// Create a fetcher with explicit client and retry settings
    pub fn with_config(config: HttpConfig, retry: RetryPolicy) -> Result<Self, FetchError> {
        let client = HttpClient::new(config).map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self { client, retry })
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch_bytes(&self, locator: &str) -> Result<Vec<u8>, FetchError> {
        with_retry(&self.retry, || self.client.get_bytes(locator))
            .await
            .map_err(|e| FetchError::Network(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(
            FetchError::Network("connection reset".into()).to_string(),
            "network error: connection reset"
        );
        assert_eq!(FetchError::Cancelled.to_string(), "fetch cancelled");
    }

    #[test]
    fn test_fetch_error_clones_equal() {
        let err = FetchError::Decode("bad magic".into());
        assert_eq!(err.clone(), err);
    }

    #[test]
    fn test_http_fetcher_builds() {
        assert!(HttpImageFetcher::new().is_ok());
    }

    #[tokio::test]
    async fn test_mock_fetcher_propagates_errors() {
        let mut mock = MockImageFetcher::new();
        mock.expect_fetch_bytes()
            .returning(|_| Err(FetchError::Network("unreachable".into())));

        let result = mock.fetch_bytes("https://example.com/a.png").await;
        assert_eq!(result, Err(FetchError::Network("unreachable".into())));
    }
}
