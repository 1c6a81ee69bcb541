//! API error type with IntoResponse
//!
//! Every failure leaves the service as the same machine-readable envelope:
//! `{"success": false, "error": <status>, "message": <fixed string>}`.
//! Details stay in the server log.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use trivia_core::ValidationError;

use crate::db::repos::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request input failed field validation (400)
    BadRequest(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Request body could not be read as the expected shape (422)
    Unprocessable,

    /// Storage failure (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::BadRequest(e) => {
                tracing::debug!("rejected request input: {}", e);
                (StatusCode::BAD_REQUEST, "bad request")
            }
            Self::NotFound { resource, id } => {
                tracing::debug!("{} '{}' not found", resource, id);
                (StatusCode::NOT_FOUND, "resources not found")
            }
            Self::Unprocessable => (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable"),
            Self::Database(e) => {
                // Log the actual error, return the fixed message.
                tracing::error!("database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        };

        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": message,
        });

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::BadRequest(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("rejected request body: {}", rejection);
        Self::Unprocessable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn envelope(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn bad_request_envelope() {
        let err = ApiError::BadRequest(ValidationError::Required { field: "question" });
        let (status, body) = envelope(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"success": false, "error": 400, "message": "bad request"})
        );
    }

    #[tokio::test]
    async fn not_found_envelope() {
        let err = ApiError::NotFound {
            resource: "question",
            id: "17".into(),
        };
        let (status, body) = envelope(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({"success": false, "error": 404, "message": "resources not found"})
        );
    }

    #[tokio::test]
    async fn unprocessable_envelope() {
        let (status, body) = envelope(ApiError::Unprocessable).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!({"success": false, "error": 422, "message": "unprocessable"})
        );
    }

    #[tokio::test]
    async fn storage_failure_envelope_hides_detail() {
        let err = ApiError::Database(DbError::Sqlx(sqlx::Error::RowNotFound));
        let (status, body) = envelope(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"success": false, "error": 500, "message": "internal server error"})
        );
    }

    #[tokio::test]
    async fn db_not_found_maps_to_404() {
        let err = ApiError::from(DbError::NotFound {
            resource: "category",
            id: "9".into(),
        });
        let (status, _) = envelope(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
