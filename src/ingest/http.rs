//! Fetch capability used by the client facades.
//!
//! The facades only need "give me the body at this URL". `HttpFetcher`
//! does that with a blocking reqwest client; tests pass a closure.

use std::time::Duration;

use tracing::debug;

use crate::config::HttpConfig;
use crate::model::NoaaError;

/// Retrieves the body of a URL as text.
///
/// Transport failures map to `NoaaError::Fetch`, non-2xx responses to
/// `NoaaError::HttpStatus`.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String, NoaaError>;
}

impl<F> Fetch for F
where
    F: Fn(&str) -> Result<String, NoaaError>,
{
    fn fetch(&self, url: &str) -> Result<String, NoaaError> {
        self(url)
    }
}

/// Blocking HTTP fetcher. No retries, no caching.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self, NoaaError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| NoaaError::Fetch(format!("failed to build HTTP client: {}", e)))?;
        Ok(HttpFetcher { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, NoaaError> {
        debug!(url, "fetching");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| NoaaError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NoaaError::HttpStatus(status.as_u16()));
        }

        response.text().map_err(|e| NoaaError::Fetch(e.to_string()))
    }
}
