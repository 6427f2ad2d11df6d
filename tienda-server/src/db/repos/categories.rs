//! Category repository

use sqlx::{FromRow, PgPool};

use crate::models::NewCategory;
use super::DbError;

/// Category record from database
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every category.
    pub async fn list(&self) -> Result<Vec<Category>, DbError> {
        let categories = sqlx::query_as(
            r#"
            SELECT
                id_categoria AS id,
                nombre_categoria AS name,
                descripcion AS description
            FROM categoria
            ORDER BY id_categoria
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Insert a category and return the stored row.
    pub async fn create(&self, category: &NewCategory) -> Result<Category, DbError> {
        let created: Category = sqlx::query_as(
            r#"
            INSERT INTO categoria (nombre_categoria, descripcion)
            VALUES ($1, $2)
            RETURNING
                id_categoria AS id,
                nombre_categoria AS name,
                descripcion AS description
            "#,
        )
        .bind(&category.name)
        .bind(category.description.as_deref())
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(id_categoria = created.id, "category created");
        Ok(created)
    }
}
