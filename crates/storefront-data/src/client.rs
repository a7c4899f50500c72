//! HTTP fetch client for remotely hosted catalog exports.

use std::time::Duration;

use async_trait::async_trait;

use crate::retry::RetryPolicy;
use crate::source::ByteSource;

/// Error type for fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Source not found: {0}")]
    NotFound(String),

    #[error("I/O error reading {path}: {message}")]
    Io { path: String, message: String },

    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request error: {0}")]
    Request(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout(e.to_string())
        } else if e.is_connect() {
            FetchError::Connection(e.to_string())
        } else if let Some(status) = e.status() {
            FetchError::Http {
                status: status.as_u16(),
                url: e.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else {
            FetchError::Request(e.to_string())
        }
    }
}

/// Fetch policy combining timeout and retry configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchPolicy {
    /// Total time allowed for a single attempt.
    pub timeout: Duration,
    /// Retry policy applied across attempts.
    pub retry: RetryPolicy,
}

impl FetchPolicy {
    /// Create a new fetch policy.
    pub fn new(timeout: Duration, retry: RetryPolicy) -> Self {
        Self { timeout, retry }
    }
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            retry: RetryPolicy::default(),
        }
    }
}

/// Catalog export served over HTTP.
///
/// Each attempt is bounded by the policy timeout; transient failures are
/// retried with the policy backoff before the error is handed back.
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
    policy: FetchPolicy,
}

impl HttpSource {
    /// Create a source for `url` with the default policy.
    pub fn new(url: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_policy(url, FetchPolicy::default())
    }

    /// Create a source for `url` with an explicit policy.
    pub fn with_policy(url: impl Into<String>, policy: FetchPolicy) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(policy.timeout)
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;
        Ok(Self {
            url: url.into(),
            client,
            policy,
        })
    }

    /// The URL this source reads.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The policy applied to each fetch.
    pub fn policy(&self) -> &FetchPolicy {
        &self.policy
    }

    async fn fetch_once(&self) -> Result<Vec<u8>, FetchError> {
        let resp = self.client.get(&self.url).send().await?;

        let status = resp.status().as_u16();
        if status == 404 {
            return Err(FetchError::NotFound(self.url.clone()));
        }
        if status >= 400 {
            return Err(FetchError::Http {
                status,
                url: self.url.clone(),
            });
        }

        let bytes = resp.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl ByteSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        let mut attempt = 0;
        loop {
            match self.fetch_once().await {
                Ok(bytes) => return Ok(bytes),
                Err(e) if self.policy.retry.should_retry(&e, attempt) => {
                    let delay = self.policy.retry.backoff.delay_for_attempt(attempt);
                    tracing::debug!(url = %self.url, attempt, ?delay, error = %e, "retrying catalog fetch");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = FetchPolicy::default();
        assert_eq!(policy.timeout, Duration::from_secs(10));
        assert_eq!(policy.retry.max_attempts, 2);
    }

    #[test]
    fn test_http_source_keeps_url_and_policy() {
        let policy = FetchPolicy::new(Duration::from_millis(250), RetryPolicy::none());
        let source = HttpSource::with_policy("http://localhost:3000/data/catalog.csv", policy.clone())
            .unwrap();
        assert_eq!(source.url(), "http://localhost:3000/data/catalog.csv");
        assert_eq!(source.describe(), "http://localhost:3000/data/catalog.csv");
        assert_eq!(source.policy(), &policy);
    }
}
