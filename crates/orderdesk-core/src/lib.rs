//! Core types and utilities for the orderdesk dashboard

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod config;
pub mod error;
pub mod format;
pub mod types;

// Re-export commonly used types
pub use config::{Config, CurrencyConfig, DashboardConfig, LoggingConfig};
pub use error::{Error, Result};
pub use types::{FieldError, FieldErrorsBody, NewOrder, Order, OrderStatus, OrdersPage, PageQuery};

/// Initialize the logging system
///
/// `RUST_LOG` wins over the configured level when set.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
#[cfg(feature = "host")]
pub fn init_logging(logging: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    let result = if logging.format.eq_ignore_ascii_case("json") {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    result.map_err(|e| Error::Logging(e.to_string()))
}
