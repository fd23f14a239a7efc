//! HTTP layer
//!
//! Axum server with:
//! - Request tracing
//! - Panic catching and common security headers
//! - Graceful shutdown
//! - Plain status-text error responses

pub mod error;
pub mod extractors;
pub mod flash;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, ServerConfig, ServerError};
