use super::services::ProductsService;
use crate::common::{ApiError, AppState, JsonBody, RawFields};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

/// GET /api/products - List all products
pub async fn get_products(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let products = ProductsService::new(state.db.clone())
        .get_all_products()
        .await?;
    Ok(Json(products))
}

/// POST /api/products - Create a new product
pub async fn create_product(
    Extension(state): Extension<Arc<AppState>>,
    JsonBody(fields): JsonBody<RawFields>,
) -> Result<impl IntoResponse, ApiError> {
    let product = ProductsService::new(state.db.clone())
        .create_product(&fields)
        .await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/products/:id - Get product by ID
pub async fn get_product_by_id(
    Extension(state): Extension<Arc<AppState>>,
    Path(product_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let product = ProductsService::new(state.db.clone())
        .get_product_by_id(product_id)
        .await?;
    Ok(Json(product))
}

/// PUT /api/products/:id - Update product
pub async fn update_product(
    Extension(state): Extension<Arc<AppState>>,
    Path(product_id): Path<i64>,
    JsonBody(fields): JsonBody<RawFields>,
) -> Result<impl IntoResponse, ApiError> {
    let product = ProductsService::new(state.db.clone())
        .update_product(product_id, &fields)
        .await?;
    Ok(Json(product))
}

/// DELETE /api/products/:id - Delete product
pub async fn delete_product(
    Extension(state): Extension<Arc<AppState>>,
    Path(product_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    ProductsService::new(state.db.clone())
        .delete_product(product_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
