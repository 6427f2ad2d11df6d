//! API error types with IntoResponse
//!
//! Errors are converted to `{"error", "message"}` JSON bodies with
//! appropriate status codes. Server-side failures are logged here, at the
//! request boundary, and never echoed to the client verbatim.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Required input missing (400)
    Validation(ValidationError),

    /// Body is not JSON or has the wrong shape (400)
    InvalidBody { message: String },

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Route exists but not for this method (405)
    MethodNotAllowed { method: String, path: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Validation(e) => json!({
                "error": "validation_error",
                "message": e.to_string()
            }),
            Self::InvalidBody { message } => json!({
                "error": "invalid_body",
                "message": message
            }),
            Self::NotFound { resource, id } => json!({
                "error": "not_found",
                "message": format!("{} '{}' not found", resource, id)
            }),
            Self::MethodNotAllowed { method, path } => json!({
                "error": "method_not_allowed",
                "message": format!("{} is not supported on '{}'", method, path)
            }),
            Self::Database(e @ DbError::RolledBack { .. }) => {
                tracing::error!(error = %e, "write rolled back");
                json!({
                    "error": "transaction_rolled_back",
                    "message": "could not save to the database; no changes were applied"
                })
            }
            Self::Database(e) => {
                tracing::error!(error = %e, "database error");
                json!({
                    "error": "database_error",
                    "message": "could not reach the database"
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody {
            message: rejection.body_text(),
        }
    }
}
