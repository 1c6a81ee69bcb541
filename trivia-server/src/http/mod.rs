//! HTTP layer
//!
//! Axum server with:
//! - Permissive CORS for the quiz frontend
//! - Request tracing
//! - Graceful shutdown
//! - A fixed JSON error envelope for every failure

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig};
