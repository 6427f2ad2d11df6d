//! Index and health check endpoints
//!
//! Neither touches the pool, so both answer even when the store is down.

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /
async fn index() -> &'static str {
    concat!("tienda-server ", env!("CARGO_PKG_VERSION"))
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Index and health routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_returns_ok() {
        let Json(body) = health().await;
        assert_eq!(body.status, "ok");
    }

    #[tokio::test]
    async fn index_names_the_service() {
        assert!(index().await.starts_with("tienda-server "));
    }
}
