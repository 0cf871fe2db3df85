//! Error types for the orderdesk dashboard

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the orderdesk core
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or is inconsistent
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message
        message: String,
    },

    /// A display currency was requested but nothing can supply exchange rates
    #[error("rate source: none configured (cannot show {from} as {to})")]
    RateSourceNotConfigured {
        /// Currency the amounts are stored in
        from: String,
        /// Currency the dashboard was asked to display
        to: String,
    },

    /// Logging subscriber could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_configuration_error_display() {
        let error = Error::configuration("per_page must be between 1 and 100");

        assert_eq!(
            error.to_string(),
            "Configuration error: per_page must be between 1 and 100"
        );
    }

    #[test]
    fn test_rate_source_error_names_the_state() {
        let error = Error::RateSourceNotConfigured {
            from: "PLN".to_string(),
            to: "USD".to_string(),
        };

        let message = error.to_string();
        assert!(message.starts_with("rate source: none configured"));
        assert!(message.contains("PLN"));
        assert!(message.contains("USD"));
    }

    #[test]
    fn test_result_alias() {
        fn fails() -> Result<()> {
            Err(Error::Logging("already set".to_string()))
        }

        assert!(matches!(fails(), Err(Error::Logging(_))));
    }
}
