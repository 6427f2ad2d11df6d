//! Supplier endpoints
//!
//! `POST /api/proveedores` is the only write that spans two tables; see
//! `SupplierRepo::create` for the transaction.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::db::{SupplierListing, SupplierRepo};
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{NewSupplier, SupplierInput};

/// Listed supplier response with one phone number
#[derive(Debug, Serialize)]
pub struct SupplierResponse {
    pub id_proveedor: i32,
    pub nombre_proveedor: String,
    pub calle: Option<String>,
    pub numero: Option<String>,
    pub colonia: Option<String>,
    pub codigo_postal: Option<String>,
    pub telefono: Option<String>,
}

impl From<SupplierListing> for SupplierResponse {
    fn from(s: SupplierListing) -> Self {
        Self {
            id_proveedor: s.id,
            nombre_proveedor: s.name,
            calle: s.street,
            numero: s.number,
            colonia: s.colony,
            codigo_postal: s.postal_code,
            telefono: s.phone,
        }
    }
}

/// Created supplier response
#[derive(Debug, Serialize)]
pub struct SupplierCreated {
    pub message: &'static str,
    pub id_proveedor: i32,
}

/// GET /api/proveedores - list suppliers with one phone each
async fn list_suppliers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SupplierResponse>>, ApiError> {
    let suppliers = SupplierRepo::new(&state.pool).list().await?;
    Ok(Json(
        suppliers.into_iter().map(SupplierResponse::from).collect(),
    ))
}

/// POST /api/proveedores - create a supplier and its phone atomically
///
/// Validation runs before the repository is touched, so a rejected body
/// never checks out a connection.
async fn create_supplier(
    State(state): State<Arc<AppState>>,
    JsonBody(input): JsonBody<SupplierInput>,
) -> Result<(StatusCode, Json<SupplierCreated>), ApiError> {
    let supplier = NewSupplier::try_from(input)?;
    let id = SupplierRepo::new(&state.pool).create(&supplier).await?;

    Ok((
        StatusCode::CREATED,
        Json(SupplierCreated {
            message: "supplier created",
            id_proveedor: id,
        }),
    ))
}

/// Supplier routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/api/proveedores",
        get(list_suppliers).post(create_supplier),
    )
}
