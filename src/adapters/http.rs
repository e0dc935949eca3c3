use crate::core::PageFetcher;
use crate::utils::error::{Result, ScoutError};
use reqwest::Client;
use std::time::Duration;

const DEFAULT_USER_AGENT: &str = concat!("version-scout/", env!("CARGO_PKG_VERSION"));

/// 單次 GET，逾時即失敗，不重試
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: Option<&str>) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!("Making request to: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(ScoutError::FetchError {
                url: url.to_string(),
                message: format!("HTTP status {}", status),
            });
        }

        Ok(response.text().await?)
    }
}
