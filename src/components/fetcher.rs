use crate::error::{fetch_error, BotResult};
use reqwest::{header, Client};
use std::time::Duration;
use tracing::info;

/// Browser user agent sent with page requests
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

/// Fetches web pages with browser-like headers and a bounded timeout
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    timeout: Duration,
}

impl PageFetcher {
    /// Create a fetcher whose requests time out after `timeout`
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            timeout,
        }
    }

    /// GET `url` and return the response body as text
    pub async fn fetch(&self, url: &str) -> BotResult<String> {
        info!("Fetching page: {}", url);

        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, BROWSER_USER_AGENT)
            .header(header::ACCEPT, ACCEPT)
            .header(header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE)
            .header(header::CONNECTION, "keep-alive")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| fetch_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(url, format!("HTTP {}", status)));
        }

        let body = response.text().await.map_err(|e| fetch_error(url, e))?;
        info!("Fetched {} bytes from {}", body.len(), url);

        Ok(body)
    }
}
