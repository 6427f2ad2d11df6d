//! Route handlers organized by resource

use axum::http::{Method, Uri};

use crate::http::error::ApiError;

pub mod health;
pub mod categories;
pub mod products;
pub mod suppliers;

/// Fallback for paths no router claims
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        resource: "route",
        id: uri.path().to_owned(),
    }
}

/// Fallback for known paths called with an unsupported method
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_owned(),
    }
}
