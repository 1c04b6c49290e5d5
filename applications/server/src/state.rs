/// Shared application state
use skillswap_core::DiscoveryService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub discovery: DiscoveryService,
    /// Include the underlying failure message in 500 responses
    pub expose_error_details: bool,
}

impl AppState {
    pub fn new(discovery: DiscoveryService) -> Self {
        Self {
            discovery,
            expose_error_details: true,
        }
    }

    pub fn with_error_details(mut self, expose: bool) -> Self {
        self.expose_error_details = expose;
        self
    }
}
