//! Category endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::db::{Category, CategoryRepo};
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{CategoryInput, NewCategory};

/// Category response, keyed by store column names
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id_categoria: i32,
    pub nombre_categoria: String,
    pub descripcion: Option<String>,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        Self {
            id_categoria: c.id,
            nombre_categoria: c.name,
            descripcion: c.description,
        }
    }
}

/// GET /api/categorias - list all categories
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    let categories = CategoryRepo::new(&state.pool).list().await?;
    Ok(Json(
        categories.into_iter().map(CategoryResponse::from).collect(),
    ))
}

/// POST /api/categorias - create a category
async fn create_category(
    State(state): State<Arc<AppState>>,
    JsonBody(input): JsonBody<CategoryInput>,
) -> Result<(StatusCode, Json<CategoryResponse>), ApiError> {
    let category = NewCategory::try_from(input)?;
    let created = CategoryRepo::new(&state.pool).create(&category).await?;

    Ok((StatusCode::CREATED, Json(CategoryResponse::from(created))))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/api/categorias",
        get(list_categories).post(create_category),
    )
}
