//! Database layer - connection pool, schema setup, and repositories
//!
//! Both entity kinds live in the store; handlers read per request through
//! the repositories and keep no in-memory copies.

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::{CategoryRepo, DbError, QuestionRepo};
