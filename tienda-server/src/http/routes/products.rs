//! Product endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::db::{Product, ProductListing, ProductRepo};
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{NewProduct, ProductInput};

/// Created product response
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id_producto: i32,
    pub nombre_producto: String,
    pub marca: Option<String>,
    pub precio_venta: f64,
    pub stock: i32,
    pub id_categoria: i32,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id_producto: p.id,
            nombre_producto: p.name,
            marca: p.brand,
            precio_venta: p.price,
            stock: p.stock,
            id_categoria: p.category_id,
        }
    }
}

/// Listed product response, category resolved to its name
#[derive(Debug, Serialize)]
pub struct ProductListingResponse {
    pub id_producto: i32,
    pub nombre_producto: String,
    pub marca: Option<String>,
    pub precio_venta: f64,
    pub stock: i32,
    pub nombre_categoria: String,
}

impl From<ProductListing> for ProductListingResponse {
    fn from(p: ProductListing) -> Self {
        Self {
            id_producto: p.id,
            nombre_producto: p.name,
            marca: p.brand,
            precio_venta: p.price,
            stock: p.stock,
            nombre_categoria: p.category_name,
        }
    }
}

/// GET /api/productos - list products with category names
async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ProductListingResponse>>, ApiError> {
    let products = ProductRepo::new(&state.pool).list().await?;
    Ok(Json(
        products
            .into_iter()
            .map(ProductListingResponse::from)
            .collect(),
    ))
}

/// POST /api/productos - create a product
async fn create_product(
    State(state): State<Arc<AppState>>,
    JsonBody(input): JsonBody<ProductInput>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    let product = NewProduct::try_from(input)?;
    let created = ProductRepo::new(&state.pool).create(&product).await?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(created))))
}

/// Product routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/productos", get(list_products).post(create_product))
}
