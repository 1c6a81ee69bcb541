//! Validation error types

use thiserror::Error;

/// Field-level validation failure for request input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Field is missing, empty, or zero
    #[error("{field} is missing or empty")]
    Required { field: &'static str },
}
