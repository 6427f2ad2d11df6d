//! Axum server setup
//!
//! Server skeleton with:
//! - CORS limited to the configured frontend origins, credentials allowed
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C, then the pool is closed

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;

/// Frontend allowed by default.
pub const DEFAULT_CORS_ORIGIN: &str = "https://tiendanepe.onrender.com";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:3000)
    pub bind_addr: SocketAddr,

    /// Origins allowed to call the API with credentials.
    pub cors_origins: Vec<String>,

    /// Allow any origin, without credentials (default: false)
    ///
    /// WARNING: Only use for local development.
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            cors_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
            cors_permissive: false,
        }
    }
}

/// Shared application state
pub struct AppState {
    pub pool: PgPool,
}

/// Build the application router with all routes.
///
/// The router only clones the pool handle; creating and closing the pool
/// stays with the caller.
pub fn build_router(pool: PgPool, config: &ServerConfig) -> Result<Router, ServerError> {
    let state = AppState { pool };

    Ok(Router::new()
        .merge(routes::health::router())
        .merge(routes::categories::router())
        .merge(routes::products::router())
        .merge(routes::suppliers::router())
        .method_not_allowed_fallback(routes::method_not_allowed)
        .fallback(routes::not_found)
        .layer(cors_layer(config)?)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state)))
}

fn cors_layer(config: &ServerConfig) -> Result<CorsLayer, ServerError> {
    if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        return Ok(CorsLayer::permissive());
    }

    let origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            // Browsers send the origin without a trailing slash.
            HeaderValue::from_str(origin.trim().trim_end_matches('/'))
                .map_err(|_| ServerError::InvalidOrigin(origin.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}

/// Run the HTTP server until a shutdown signal arrives, then close the pool.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(connect_options(&database_url, None)?).await?;
/// run_server(pool, ServerConfig::default()).await?;
/// ```
pub async fn run_server(pool: PgPool, config: ServerConfig) -> Result<(), ServerError> {
    let app = build_router(pool.clone(), &config)?;

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on http://{}", config.bind_addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    pool.close().await;
    tracing::info!("Server shutdown complete");
    served.map_err(ServerError::from)
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid CORS origin: '{0}'")]
    InvalidOrigin(String),
}
