//! Application state management

use orderdesk_client::{ApiClient, OrdersApi};
use orderdesk_core::{Config, Error, Result};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Upstream orders client shared by all requests
pub type SharedOrdersApi = Arc<dyn OrdersApi + Send + Sync>;

/// Application state holding configuration and the upstream client
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Client for the upstream order collection
    pub orders: SharedOrdersApi,
}

impl AppState {
    /// Create new application state talking to `config.upstream`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the upstream URL is not absolute or
    /// the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let client = ApiClient::with_timeout(
            config.upstream.base_url.clone(),
            Duration::from_secs(config.upstream.timeout_secs),
        )
        .map_err(|e| Error::configuration(format!("upstream: {e}")))?;

        Ok(Self::with_orders(config, Arc::new(client)))
    }

    /// Create state around an existing orders client
    pub fn with_orders(config: Config, orders: SharedOrdersApi) -> Self {
        Self { config, orders }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::field_reassign_with_default)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_relative_upstream() {
        let mut config = Config::default();
        config.upstream.base_url = "orders.local".to_string();

        let error = AppState::new(config).err().map(|e| e.to_string());

        assert!(error.is_some_and(|message| message.contains("upstream")));
    }

    #[test]
    fn test_default_upstream_is_accepted() {
        assert!(AppState::new(Config::default()).is_ok());
    }
}
