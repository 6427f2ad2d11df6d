//! tienda-server: HTTP API for the tienda catalog
//!
//! Serves categories, products, and suppliers from PostgreSQL as JSON.
//! The pool is created by the caller and handed to [`http::run_server`];
//! supplier creation writes its two rows in a single transaction.

pub mod db;
pub mod http;
pub mod models;

pub use db::DbError;
pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
pub use models::ValidationError;
