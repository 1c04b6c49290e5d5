//! HTTP client for the Skill Swap public API.

use crate::error::{ClientError, Result};
use crate::types::{ClientConfig, HealthResponse};
use async_trait::async_trait;
use reqwest::Client;
use skillswap_core::{DiscoverResponse, DiscoveryFilter, PublicProfile};
use std::time::Duration;
use tracing::debug;

/// Anything the discovery page can fetch profiles from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DiscoverySource: Send + Sync {
    /// Fetch the profiles matching `filter`.
    async fn discover_users(&self, filter: &DiscoveryFilter) -> Result<Vec<PublicProfile>>;
}

/// Client for the unauthenticated discovery endpoints.
///
/// # Example
///
/// ```ignore
/// use skillswap_client::{ClientConfig, DiscoveryClient};
/// use skillswap_core::DiscoveryFilter;
///
/// let client = DiscoveryClient::new(ClientConfig::new("http://localhost:5000"))?;
/// let response = client.discover(&DiscoveryFilter::new().with_skill("excel")).await?;
/// println!("Found {} users", response.users.len());
/// ```
#[derive(Debug, Clone)]
pub struct DiscoveryClient {
    http: Client,
    base_url: String,
}

impl DiscoveryClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        url::Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("SkillSwap/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Get the normalized server URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Query `/api/public/users/discover`.
    ///
    /// Only non-empty filter values are sent.
    pub async fn discover(&self, filter: &DiscoveryFilter) -> Result<DiscoverResponse> {
        let url = format!("{}/api/public/users/discover", self.base_url);
        let filter = filter.normalized();
        debug!(url = %url, skill = ?filter.skill, search = ?filter.search, "Discovering users");

        let response = self
            .http
            .get(&url)
            .query(&filter)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();

        if status.is_success() {
            let body: DiscoverResponse = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse discover response: {}", e))
            })?;

            debug!(users = body.users.len(), "Fetched discovery results");
            Ok(body)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Query `/api/public/health`.
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = format!("{}/api/public/health", self.base_url);
        debug!(url = %url, "Checking server health");

        let response = self.http.get(&url).send().await.map_err(map_send_error)?;
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse health response: {}", e))
            })
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

fn map_send_error(e: reqwest::Error) -> ClientError {
    if e.is_connect() || e.is_timeout() {
        ClientError::ServerUnreachable(e.to_string())
    } else {
        ClientError::Request(e)
    }
}

#[async_trait]
impl DiscoverySource for DiscoveryClient {
    async fn discover_users(&self, filter: &DiscoveryFilter) -> Result<Vec<PublicProfile>> {
        Ok(self.discover(filter).await?.users)
    }
}
