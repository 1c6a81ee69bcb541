//! trivia-server: HTTP surface and storage layer for the trivia quiz backend
//!
//! Routes requests onto the question service and quiz selector from
//! `trivia-core` and maps results and failures to the JSON envelopes the
//! quiz frontend expects.

pub mod db;
pub mod http;

pub use http::{build_router, run_server, AppState, ServerConfig};
