//! API Module
//!
//! HTTP handlers and routing for the division REST API.
//!
//! # Endpoints
//! - `POST /divide` - Divide a numerator by a denominator
//! - `GET /health` - Health check endpoint
//! - `GET /` - API documentation

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
