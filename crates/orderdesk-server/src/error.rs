//! JSON error responses for the order routes

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use orderdesk_client::ApiError;
use orderdesk_core::FieldErrorsBody;
use serde::Serialize;
use std::fmt;

/// Error returned by a host handler
#[derive(Debug)]
pub struct HostError {
    /// Error message
    pub message: String,
    /// HTTP status code
    pub status: StatusCode,
    /// Error code for API responses
    pub code: &'static str,
}

impl HostError {
    /// Create a new host error
    pub fn new(message: impl Into<String>, status: StatusCode, code: &'static str) -> Self {
        Self {
            message: message.into(),
            status,
            code,
        }
    }

    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::BAD_REQUEST, "BAD_REQUEST")
    }

    /// Create a bad gateway error
    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::BAD_GATEWAY, "UPSTREAM_FAILED")
    }

    /// Keep an upstream status, or fall back to 502 when it is not a valid code
    pub fn upstream_status(status: u16) -> Self {
        StatusCode::from_u16(status).map_or_else(
            |_| Self::bad_gateway(format!("Upstream answered with invalid status {status}")),
            |status| Self::new(format!("Upstream answered {status}"), status, "UPSTREAM_STATUS"),
        )
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for HostError {}

/// Error body
#[derive(Debug, Serialize)]
pub struct HostErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: &'static str,
}

impl IntoResponse for HostError {
    fn into_response(self) -> Response {
        let body = HostErrorResponse {
            error: self.message,
            code: self.code,
        };

        (self.status, Json(body)).into_response()
    }
}

/// Failure of a forwarded mutation
///
/// 422 field errors keep their body; other upstream statuses keep their code.
#[derive(Debug)]
pub enum ForwardError {
    /// Upstream rejected the payload field by field
    Rejected(FieldErrorsBody),
    /// Anything else
    Host(HostError),
}

impl From<ApiError> for ForwardError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::FieldErrors(field_errors) => Self::Rejected(FieldErrorsBody { field_errors }),
            ApiError::Status { status } => Self::Host(HostError::upstream_status(status)),
            other => Self::Host(HostError::bad_gateway(other.to_string())),
        }
    }
}

impl From<HostError> for ForwardError {
    fn from(error: HostError) -> Self {
        Self::Host(error)
    }
}

impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        match self {
            Self::Rejected(body) => (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response(),
            Self::Host(error) => error.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderdesk_core::FieldError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_upstream_status_is_kept() {
        let error = HostError::upstream_status(409);

        assert_eq!(error.status, StatusCode::CONFLICT);
        assert_eq!(error.code, "UPSTREAM_STATUS");
    }

    #[test]
    fn test_invalid_upstream_status_becomes_bad_gateway() {
        let error = HostError::upstream_status(42);

        assert_eq!(error.status, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_forward_error_mapping() {
        let rejected = ForwardError::from(ApiError::FieldErrors(vec![FieldError::new(
            "customer", "required",
        )]));
        assert!(matches!(
            rejected,
            ForwardError::Rejected(ref body) if body.field_errors.len() == 1
        ));

        let decode = ForwardError::from(ApiError::decode("eof"));
        assert!(matches!(
            decode,
            ForwardError::Host(ref error) if error.status == StatusCode::BAD_GATEWAY
        ));

        let status = ForwardError::from(ApiError::status(404));
        assert!(matches!(
            status,
            ForwardError::Host(ref error) if error.status == StatusCode::NOT_FOUND
        ));
    }
}
