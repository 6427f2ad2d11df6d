//! Supplier repository
//!
//! Creating a supplier writes two rows: `proveedor` and the
//! `telefonos_proveedor` row that references it. A phone row must never
//! exist without its supplier, so both inserts run in one transaction on
//! one checked-out connection.

use sqlx::{Connection, FromRow, PgConnection, PgPool};

use crate::models::NewSupplier;
use super::DbError;

/// Supplier with one of its phone numbers for list display
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct SupplierListing {
    pub id: i32,
    pub name: String,
    pub street: Option<String>,
    pub number: Option<String>,
    pub colony: Option<String>,
    pub postal_code: Option<String>,
    pub phone: Option<String>,
}

/// Supplier repository
pub struct SupplierRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> SupplierRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List suppliers, each with one phone number.
    ///
    /// Suppliers with several phones get whichever row the subquery hits
    /// first; suppliers with none get `None`.
    pub async fn list(&self) -> Result<Vec<SupplierListing>, DbError> {
        let suppliers = sqlx::query_as(
            r#"
            SELECT
                p.id_proveedor AS id,
                p.nombre_proveedor AS name,
                p.calle AS street,
                p.numero AS number,
                p.colonia AS colony,
                p.codigo_postal AS postal_code,
                (SELECT tp.telefono
                 FROM telefonos_proveedor tp
                 WHERE tp.id_proveedor = p.id_proveedor
                 LIMIT 1) AS phone
            FROM proveedor p
            ORDER BY p.id_proveedor
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(suppliers)
    }

    /// Insert a supplier and its phone atomically, returning the new
    /// `id_proveedor`.
    ///
    /// Errors before BEGIN (checkout, BEGIN itself) are `DbError::Sqlx`.
    /// Any failure after BEGIN is rolled back explicitly and reported as
    /// `DbError::RolledBack`. The connection goes back to the pool when
    /// `conn` drops, which happens exactly once on every path out of here.
    pub async fn create(&self, supplier: &NewSupplier) -> Result<i32, DbError> {
        let mut conn = self.pool.acquire().await?;
        let mut tx = conn.begin().await?;

        match insert_with_phone(&mut *tx, supplier).await {
            Ok(id) => {
                tx.commit()
                    .await
                    .map_err(|source| DbError::RolledBack { source })?;
                tracing::debug!(id_proveedor = id, "supplier created");
                Ok(id)
            }
            Err(source) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!(error = %rollback_err, "rollback failed");
                }
                Err(DbError::RolledBack { source })
            }
        }
    }
}

/// Both inserts, in order. Must run inside an open transaction.
async fn insert_with_phone(
    conn: &mut PgConnection,
    supplier: &NewSupplier,
) -> Result<i32, sqlx::Error> {
    let (id,): (i32,) = sqlx::query_as(
        r#"
        INSERT INTO proveedor (nombre_proveedor, calle, numero, colonia, codigo_postal)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id_proveedor
        "#,
    )
    .bind(&supplier.name)
    .bind(supplier.street.as_deref())
    .bind(supplier.number.as_deref())
    .bind(supplier.colony.as_deref())
    .bind(supplier.postal_code.as_deref())
    .fetch_one(&mut *conn)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO telefonos_proveedor (id_proveedor, telefono)
        VALUES ($1, $2)
        "#,
    )
    .bind(id)
    .bind(&supplier.phone)
    .execute(&mut *conn)
    .await?;

    Ok(id)
}
