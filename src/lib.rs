//! Division API - A minimal JSON HTTP service
//!
//! Divides two numbers over `POST /divide`, with health and documentation endpoints.

pub mod api;
pub mod config;
pub mod division;
pub mod error;
pub mod logging;
pub mod models;

pub use api::create_router;
pub use config::Config;
pub use error::ApiError;
