//! Product repository
//!
//! `precio_venta` is NUMERIC in the store and is cast to float8 on the way
//! out so it decodes as `f64`.

use sqlx::{FromRow, PgPool};

use crate::models::NewProduct;
use super::DbError;

/// Product record as inserted
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub brand: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub category_id: i32,
}

/// Product joined with its category name for list display
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ProductListing {
    pub id: i32,
    pub name: String,
    pub brand: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub category_name: String,
}

/// Product repository
pub struct ProductRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List products with their category name.
    ///
    /// Uses a JOIN so the category name comes back in the same query.
    pub async fn list(&self) -> Result<Vec<ProductListing>, DbError> {
        let products = sqlx::query_as(
            r#"
            SELECT
                p.id_producto AS id,
                p.nombre_producto AS name,
                p.marca AS brand,
                p.precio_venta::float8 AS price,
                p.stock,
                c.nombre_categoria AS category_name
            FROM producto p
            JOIN categoria c ON p.id_categoria = c.id_categoria
            ORDER BY p.id_producto
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Insert a product and return the stored row.
    ///
    /// An unknown `category_id` fails on the foreign key and surfaces as
    /// `DbError::Sqlx`.
    pub async fn create(&self, product: &NewProduct) -> Result<Product, DbError> {
        let created: Product = sqlx::query_as(
            r#"
            INSERT INTO producto (nombre_producto, marca, precio_venta, stock, id_categoria)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING
                id_producto AS id,
                nombre_producto AS name,
                marca AS brand,
                precio_venta::float8 AS price,
                stock,
                id_categoria AS category_id
            "#,
        )
        .bind(&product.name)
        .bind(product.brand.as_deref())
        .bind(product.price)
        .bind(product.stock)
        .bind(product.category_id)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(id_producto = created.id, "product created");
        Ok(created)
    }
}
