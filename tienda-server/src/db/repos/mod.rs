//! Repository implementations for database access
//!
//! Each repository borrows the pool and follows these patterns:
//! - Single statement per read or single-row insert
//! - `RETURNING` to hand back generated identifiers
//! - Transactions for dependent inserts

pub mod categories;
pub mod products;
pub mod suppliers;

pub use categories::{Category, CategoryRepo};
pub use products::{Product, ProductListing, ProductRepo};
pub use suppliers::{SupplierListing, SupplierRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Failure with no transaction open: connect, checkout, or a
    /// single-statement query.
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// A transaction was opened and rolled back; nothing it wrote is visible.
    #[error("transaction rolled back: {source}")]
    RolledBack {
        #[source]
        source: sqlx::Error,
    },
}
