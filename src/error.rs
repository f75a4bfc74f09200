//! Error types for the division API
//!
//! Every failure a handler can produce is an [`ApiError`]. The variant picks the
//! HTTP status and the `error`/`message` pair returned to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

// == API Error Enum ==
/// Unified error type for the division API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Body missing, not JSON, or not a JSON object
    #[error("No JSON data provided")]
    MalformedRequest,

    /// `numerator` or `denominator` absent or null
    #[error("Missing required fields")]
    MissingField,

    /// A field is present but cannot be coerced to a number
    #[error("Invalid input type")]
    InvalidType,

    /// Denominator coerced to zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Quotient of two finite operands is not representable
    #[error("Result out of range")]
    ResultOutOfRange,

    /// Body exceeds the request size limit
    #[error("Payload too large")]
    PayloadTooLarge,

    /// No route matched the request path
    #[error("Not found")]
    NotFound,

    /// Anything unanticipated. The detail is only ever logged.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedRequest
            | ApiError::MissingField
            | ApiError::InvalidType
            | ApiError::DivisionByZero
            | ApiError::ResultOutOfRange => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short machine-readable category placed in the `error` field.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::MalformedRequest => "No JSON data provided",
            ApiError::MissingField => "Missing required fields",
            ApiError::InvalidType => "Invalid input type",
            ApiError::DivisionByZero => "Division by zero",
            ApiError::ResultOutOfRange => "Result out of range",
            ApiError::PayloadTooLarge => "Payload too large",
            ApiError::NotFound => "Not found",
            ApiError::Internal(_) => "Internal server error",
        }
    }

    /// Human-readable detail placed in the `message` field.
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::MalformedRequest => "Please provide numerator and denominator in JSON format",
            ApiError::MissingField => "Both 'numerator' and 'denominator' are required",
            ApiError::InvalidType => "Both numerator and denominator must be numbers",
            ApiError::DivisionByZero => "Denominator cannot be zero",
            ApiError::ResultOutOfRange => "The result is too large to represent",
            ApiError::PayloadTooLarge => "Request body exceeds the maximum allowed size",
            ApiError::NotFound => "The requested endpoint does not exist",
            ApiError::Internal(_) => "An unexpected error occurred",
        }
    }

    /// Response body for this error.
    pub fn to_body(&self) -> ErrorResponse {
        ErrorResponse::new(self.code(), self.message())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            error!("Unexpected error: {}", detail);
        }

        (self.status(), Json(self.to_body())).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the division API.
pub type Result<T> = std::result::Result<T, ApiError>;
