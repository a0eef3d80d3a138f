//! Station feed client.

use super::error::StationError;

/// Default URL of the station name feed.
const DEFAULT_FEED_URL: &str =
    "https://kyfw.12306.cn/otn/resources/js/framework/station_name.js?station_version=1.9027";

/// Configuration for the station feed client.
#[derive(Debug, Clone)]
pub struct StationClientConfig {
    /// URL of the feed script
    pub feed_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Skip TLS certificate verification (the feed host's chain is not
    /// trusted by common root stores)
    pub accept_invalid_certs: bool,
}

impl StationClientConfig {
    /// Create a config pointing at the default feed.
    pub fn new() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            timeout_secs: 30,
            accept_invalid_certs: true,
        }
    }

    /// Set a custom feed URL.
    pub fn with_feed_url(mut self, url: impl Into<String>) -> Self {
        self.feed_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Enable or disable TLS certificate verification.
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }
}

impl Default for StationClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the station name feed.
#[derive(Debug, Clone)]
pub struct StationClient {
    http: reqwest::Client,
    feed_url: String,
}

impl StationClient {
    /// Create a new feed client.
    pub fn new(config: StationClientConfig) -> Result<Self, StationError> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            feed_url: config.feed_url,
        })
    }

    /// The URL this client fetches.
    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    /// Fetch the raw feed text.
    pub async fn fetch_feed(&self) -> Result<String, StationError> {
        tracing::debug!(url = %self.feed_url, "fetching station feed");

        let response = self.http.get(&self.feed_url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StationError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = StationClientConfig::new();
        assert_eq!(config.feed_url, DEFAULT_FEED_URL);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.accept_invalid_certs);
    }

    #[test]
    fn config_builder() {
        let config = StationClientConfig::new()
            .with_feed_url("http://localhost:8080/station_name.js")
            .with_timeout(5)
            .with_accept_invalid_certs(false);
        assert_eq!(config.feed_url, "http://localhost:8080/station_name.js");
        assert_eq!(config.timeout_secs, 5);
        assert!(!config.accept_invalid_certs);
    }

    #[test]
    fn client_creation() {
        let client = StationClient::new(StationClientConfig::new()).unwrap();
        assert_eq!(client.feed_url(), DEFAULT_FEED_URL);
    }
}
