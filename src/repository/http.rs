//! `reqwest`-backed transport for the content API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde_json::Value;
use url::Url;

use crate::repository::ContentSource;
use crate::repository::errors::{ApiConfigError, FetchError, FetchResult};

/// Shared HTTP client; cloning is cheap.
#[derive(Clone, Debug)]
pub struct HttpContentSource {
    client: reqwest::Client,
}

impl HttpContentSource {
    /// Builds a client whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, ApiConfigError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiConfigError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn get_json(&self, url: &Url) -> FetchResult<Value> {
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.json::<Value>().await?)
    }
}
