//! Error types for order API calls

use orderdesk_core::FieldError;
use thiserror::Error;

/// Result type alias for order API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by [`crate::OrdersApi`] implementations
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The create endpoint answered 422 with per-field messages
    #[error("Order rejected with {} field error(s)", .0.len())]
    FieldErrors(Vec<FieldError>),

    /// Any other non-success status
    #[error("API returned error: {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// The configured base URL is not an absolute URL
    #[error("Invalid base URL {url}: {message}")]
    InvalidBaseUrl {
        /// Rejected URL
        url: String,
        /// Parser message
        message: String,
    },

    /// The response body did not have the expected shape
    #[error("Failed to parse response: {message}")]
    Decode {
        /// Parser message
        message: String,
    },
}

impl ApiError {
    /// Create a status error
    pub const fn status(status: u16) -> Self {
        Self::Status { status }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Field errors carried by a 422 response, if any
    pub fn field_errors(&self) -> Option<&[FieldError]> {
        match self {
            Self::FieldErrors(errors) => Some(errors),
            _ => None,
        }
    }

    /// Upstream HTTP status, if the failure had one
    pub const fn http_status(&self) -> Option<u16> {
        match self {
            Self::FieldErrors(_) => Some(422),
            Self::Status { status } => Some(*status),
            Self::Transport(_) | Self::InvalidBaseUrl { .. } | Self::Decode { .. } => None,
        }
    }
}
