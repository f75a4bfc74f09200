//! API Handlers
//!
//! Thin axum adapters around the division core and the static endpoints.

use axum::{
    body::Bytes,
    extract::rejection::BytesRejection,
    http::StatusCode,
    Json,
};
use tracing::warn;

use crate::division;
use crate::error::{ApiError, Result};
use crate::models::{DivisionResponse, HealthResponse, InfoResponse};

/// Handler for POST /divide
///
/// Takes the raw body rather than `Json<T>` so that a missing or malformed
/// body maps to the API's own 400 response instead of axum's rejection.
/// A body over the size limit gets a JSON 413.
pub async fn divide_handler(
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<DivisionResponse>> {
    let body = body.map_err(|rejection| {
        warn!("Failed to read request body: {}", rejection.body_text());
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::MalformedRequest
        }
    })?;

    division::divide(&body).map(Json)
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handler for GET /
pub async fn info_handler() -> Json<InfoResponse> {
    Json(InfoResponse::describe())
}

/// Fallback for paths with no route.
pub async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}
