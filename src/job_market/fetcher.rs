// src/job_market/fetcher.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header::USER_AGENT, Client};
use std::time::Duration;
use tracing::debug;

use crate::error::CollectError;

/// Issues a single GET and returns the response body.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(
        &self,
        url: &str,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<String, CollectError>;
}

/// `reqwest`-backed fetcher. Non-2xx responses count as transport failures.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(
        &self,
        url: &str,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<String, CollectError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, user_agent)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| CollectError::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CollectError::transport(url, format!("HTTP error: {}", status)));
        }

        response
            .text()
            .await
            .map_err(|e| CollectError::transport(url, format!("failed to read body: {}", e)))
    }
}
