//! HTTP page fetcher
//!
//! A thin transport layer over `reqwest`. Every non-success outcome
//! (transport error, timeout, non-2xx status) surfaces as a `FetchError`;
//! the crawler treats them all as a single failure kind and never retries.

use reqwest::Client;
use std::time::Duration;

use crate::config::CrawlerConfig;
use crate::utils::error::FetchError;

/// HTTP fetcher with a bounded per-request timeout
pub struct PageFetcher {
    /// HTTP client with configured timeout and compression
    client: Client,
}

impl PageFetcher {
    /// Create a new fetcher from crawler configuration
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn new(config: &CrawlerConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .gzip(true)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }

    /// Fetch a URL and return the response body as text
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Timeout` when the request exceeds the configured
    /// timeout, `FetchError::ServerError` for non-2xx status codes, and
    /// `FetchError::Http` for any other transport failure.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Http(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::ServerError(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(body)
    }
}
