/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use skillswap_core::{FilterPrecedence, DEFAULT_MAX_RESULTS};
use std::path::{Path, PathBuf};

/// Upper bound accepted for `discovery.max_results`.
pub const MAX_RESULTS_CEILING: usize = 100;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_discovery")]
    pub discovery: DiscoverySettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiscoverySettings {
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// How `skill` and `search` combine when both are given
    #[serde(default)]
    pub filter_precedence: FilterPrecedence,

    /// Include the underlying failure text in 500 responses
    #[serde(default = "default_expose_error_details")]
    pub expose_error_details: bool,
}

impl ServerConfig {
    /// Load configuration from `config.toml` (if present) and environment
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file (or `config.toml` when
    /// `None`) and environment.
    ///
    /// Environment variables use the `SWAP_` prefix and `__` between
    /// sections, e.g. `SWAP_DISCOVERY__MAX_RESULTS=10`.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ServerError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("SWAP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.storage.database_url.trim().is_empty() {
            return Err(ServerError::Config(
                "Database URL is required (set SWAP_STORAGE__DATABASE_URL)".to_string(),
            ));
        }

        if !(1..=MAX_RESULTS_CEILING).contains(&self.discovery.max_results) {
            return Err(ServerError::Config(format!(
                "discovery.max_results must be between 1 and {}, got {}",
                MAX_RESULTS_CEILING, self.discovery.max_results
            )));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/skillswap.db".to_string()
}

fn default_discovery() -> DiscoverySettings {
    DiscoverySettings {
        max_results: default_max_results(),
        filter_precedence: FilterPrecedence::default(),
        expose_error_details: default_expose_error_details(),
    }
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

fn default_expose_error_details() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            discovery: default_discovery(),
        }
    }
}
