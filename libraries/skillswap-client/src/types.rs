//! Types for Skill Swap API requests and responses.

use serde::Deserialize;
use std::time::Duration;

/// Where the API lives when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Configuration for connecting to a Skill Swap server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the server (e.g., "https://swap.example.com")
    pub url: String,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a config with the default timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

/// Response from `/api/public/health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub message: String,
    pub status: String,
    pub timestamp: String,
}
