//! HTTP page fetcher implementation
//!
//! This module issues the species counts requests, one page at a time:
//! - Building the HTTP client with the configured user agent and timeout
//! - Fixing the per-request query (any verification state, wild only, page size)
//! - Classifying failures into [`TransportError`]
//!
//! No retries happen here; a failed page is reported to the collection loop.

use crate::collector::types::RawPage;
use crate::config::CollectorConfig;
use crate::TransportError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Path of the species counts endpoint below the API root
pub const SPECIES_COUNTS_PATH: &str = "observations/species_counts";

/// Source of species count pages
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches one 1-based page of species counts for `place_id`
    async fn fetch_page(&self, place_id: u64, page: u32) -> Result<RawPage, TransportError>;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The collector configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &CollectorConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.timeout())
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// [`PageFetcher`] backed by the remote species-observation API
pub struct HttpPageFetcher {
    client: Client,
    endpoint: String,
    per_page: u32,
}

impl HttpPageFetcher {
    /// Creates a fetcher from the collector configuration
    pub fn new(config: &CollectorConfig) -> Result<Self, reqwest::Error> {
        let client = build_http_client(config)?;
        Ok(Self::with_client(client, config))
    }

    /// Creates a fetcher around an existing client
    pub fn with_client(client: Client, config: &CollectorConfig) -> Self {
        Self {
            client,
            endpoint: species_counts_url(&config.base_url),
            per_page: config.effective_per_page(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Joins the API root and the species counts path
pub fn species_counts_url(base_url: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), SPECIES_COUNTS_PATH)
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, place_id: u64, page: u32) -> Result<RawPage, TransportError> {
        let query = [
            ("place_id", place_id.to_string()),
            ("verifiable", "any".to_string()),
            ("captive", "false".to_string()),
            ("per_page", self.per_page.to_string()),
            ("page", page.to_string()),
        ];

        tracing::debug!("GET {} page={} place_id={}", self.endpoint, page, place_id);

        let response = self
            .client
            .get(&self.endpoint)
            .header("Accept", "application/json")
            .query(&query)
            .send()
            .await
            .map_err(|source| TransportError::Network {
                url: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        let url = response.url().to_string();

        if !status.is_success() {
            return Err(TransportError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| TransportError::Network {
                url: url.clone(),
                source,
            })?;

        serde_json::from_str(&body).map_err(|e| TransportError::Decode {
            url,
            message: e.to_string(),
        })
    }
}
