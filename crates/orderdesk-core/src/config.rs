//! Configuration management for orderdesk

use crate::types::{DEFAULT_PER_PAGE, MAX_PER_PAGE};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Web host configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream order collection endpoint
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Dashboard presentation settings
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Web host configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the compiled UI bundle
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

/// Upstream order collection endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL; `/api/orders` is appended
    #[serde(default = "default_upstream_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Dashboard presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Orders per page
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Name shown in the header greeting
    #[serde(default = "default_greeting_name")]
    pub greeting_name: String,

    /// Avatar image shown next to the greeting
    #[serde(default = "default_avatar_url")]
    pub avatar_url: String,

    /// Seconds a notification stays on screen
    #[serde(default = "default_toast_seconds")]
    pub toast_seconds: u64,

    /// Currency display
    #[serde(default)]
    pub currency: CurrencyConfig,
}

/// Currency display settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Currency the stored amounts are in
    #[serde(default = "default_base_currency")]
    pub base: String,

    /// Currency to display amounts in, if different from `base`
    #[serde(default)]
    pub display: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_upstream_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

fn default_greeting_name() -> String {
    "Oliwia".to_string()
}

fn default_avatar_url() -> String {
    "/img/avatar_photo.jpeg".to_string()
}

const fn default_toast_seconds() -> u64 {
    4
}

fn default_base_currency() -> String {
    "PLN".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_upstream_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            greeting_name: default_greeting_name(),
            avatar_url: default_avatar_url(),
            toast_seconds: default_toast_seconds(),
            currency: CurrencyConfig::default(),
        }
    }
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            base: default_base_currency(),
            display: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from `orderdesk.toml` (optional) and `ORDERDESK__*` variables
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, parsed or validated.
    #[cfg(feature = "host")]
    pub fn load() -> crate::Result<Self> {
        Self::build(config::Config::builder().add_source(
            config::File::with_name("orderdesk").required(false),
        ))
    }

    /// Load configuration from an explicit file, still honouring the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or the result does not validate.
    #[cfg(feature = "host")]
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        Self::build(config::Config::builder().add_source(config::File::from(path)))
    }

    #[cfg(feature = "host")]
    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> crate::Result<Self> {
        let config: Self = builder
            .add_source(
                config::Environment::with_prefix("ORDERDESK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(config::Config::try_deserialize::<Self>)
            .map_err(|e| crate::Error::configuration(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot express
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first offending value.
    pub fn validate(&self) -> crate::Result<()> {
        self.dashboard.validate()?;

        if self.upstream.base_url.trim().is_empty() {
            return Err(crate::Error::configuration("upstream.base_url is empty"));
        }
        if self.upstream.timeout_secs == 0 {
            return Err(crate::Error::configuration(
                "upstream.timeout_secs must be positive",
            ));
        }

        Ok(())
    }
}

impl DashboardConfig {
    /// Check the dashboard section
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an out-of-range page size or empty currency.
    pub fn validate(&self) -> crate::Result<()> {
        if !(1..=MAX_PER_PAGE).contains(&self.per_page) {
            return Err(crate::Error::configuration(format!(
                "dashboard.per_page must be between 1 and {MAX_PER_PAGE}, got {}",
                self.per_page
            )));
        }
        if self.currency.base.trim().is_empty() {
            return Err(crate::Error::configuration(
                "dashboard.currency.base is empty",
            ));
        }
        Ok(())
    }
}
