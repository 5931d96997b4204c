//! HTTP server layer
//!
//! Axum server with:
//! - Permissive CORS (any origin)
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses, including 404/405 fallbacks and caught panics

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
