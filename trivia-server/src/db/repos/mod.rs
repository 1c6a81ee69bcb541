//! Repository implementations for database access
//!
//! Repositories borrow the pool per request and push filtering into SQL
//! with bound parameters only.

pub mod categories;
pub mod questions;

pub use categories::CategoryRepo;
pub use questions::{DbError, QuestionRepo};
