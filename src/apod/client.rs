//! APOD HTTP client
//!
//! An explicitly constructed client instance holding its configuration; no
//! process-wide state. One outbound GET per single-record fetch, with
//! non-success statuses, undecodable bodies, and incomplete payloads all
//! reported as per-date fetch failures.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::fetch::FactSource;
use super::record::{ApodPayload, FactRecord, PayloadError};
use crate::config::DEFAULT_API_KEY;

/// Configuration for the APOD client
#[derive(Debug, Clone)]
pub struct ApodClientConfig {
    /// Base URL of the NASA planetary API
    pub base_url: String,
    /// API key sent with every request
    pub api_key: String,
    /// Timeout for HTTP requests (default: 10 seconds)
    pub request_timeout: Duration,
}

impl Default for ApodClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.nasa.gov/planetary".to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Client for NASA's Astronomy Picture of the Day endpoint
pub struct ApodClient {
    config: ApodClientConfig,
    http_client: reqwest::Client,
}

impl ApodClient {
    /// Create a new client with default configuration
    pub fn new() -> Self {
        Self::with_config(ApodClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ApodClientConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent("starlore/0.1")
            .build()
            .unwrap_or_default();

        Self {
            config,
            http_client,
        }
    }

    /// Fetch the record for one date.
    pub async fn fetch_date(&self, date: &str) -> Result<FactRecord, ApodError> {
        let url = format!("{}/apod", self.config.base_url);
        debug!(date = %date, "Fetching APOD entry");

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.config.api_key.as_str()), ("date", date)])
            .send()
            .await
            .map_err(|e| ApodError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApodError::Status {
                status: status.as_u16(),
                date: date.to_string(),
            });
        }

        let payload: ApodPayload = response
            .json()
            .await
            .map_err(|e| ApodError::Decode(e.to_string()))?;

        Ok(FactRecord::from_payload(payload)?)
    }
}

impl Default for ApodClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FactSource for ApodClient {
    async fn fetch_by_date(&self, date: &str) -> Result<FactRecord, ApodError> {
        self.fetch_date(date).await
    }
}

/// Errors from APOD fetching
#[derive(Debug, thiserror::Error)]
pub enum ApodError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} for date {date}")]
    Status { status: u16, date: String },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Incomplete payload: {0}")]
    Payload(#[from] PayloadError),

    #[error("No astronomy data could be fetched from any source")]
    AllSourcesUnavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApodClientConfig::default();
        assert_eq!(config.base_url, "https://api.nasa.gov/planetary");
        assert_eq!(config.api_key, DEFAULT_API_KEY);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_payload_error_converts() {
        let err: ApodError = PayloadError::MissingImage.into();
        assert!(matches!(err, ApodError::Payload(PayloadError::MissingImage)));
    }
}
