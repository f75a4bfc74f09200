//! API Routes
//!
//! Configures the Axum router with all division API endpoints.

use std::any::Any;
use std::backtrace::Backtrace;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{divide_handler, health_handler, info_handler, not_found_handler};
use crate::error::ApiError;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /divide` - Divide two numbers
/// - `GET /health` - Health check endpoint
/// - `GET /` - API documentation
///
/// Unknown paths get a JSON 404.
pub fn create_router() -> Router {
    let router = Router::new()
        .route("/divide", post(divide_handler))
        .route("/health", get(health_handler))
        .route("/", get(info_handler))
        .fallback(not_found_handler);

    with_middleware(router)
}

/// Wraps a router in the middleware stack.
///
/// # Middleware
/// - Panic catching: a panicking handler yields the generic 500 body
/// - CORS: Allows any origin
/// - Tracing: Logs all requests for debugging
fn with_middleware(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Turns a handler panic into a 500. The payload and a backtrace go to the log only.
fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(format!(
        "handler panicked: {}\nStack trace:\n{}",
        detail,
        Backtrace::force_capture()
    ))
    .into_response()
}
