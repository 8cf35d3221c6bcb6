use super::services::ProvidersService;
use crate::common::{ApiError, AppState, JsonBody, RawFields};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

/// GET /api/providers - List all providers
pub async fn get_providers(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let providers = ProvidersService::new(state.db.clone())
        .get_all_providers()
        .await?;
    Ok(Json(providers))
}

/// POST /api/providers - Create a new provider
pub async fn create_provider(
    Extension(state): Extension<Arc<AppState>>,
    JsonBody(fields): JsonBody<RawFields>,
) -> Result<impl IntoResponse, ApiError> {
    let provider = ProvidersService::new(state.db.clone())
        .create_provider(&fields)
        .await?;
    Ok((StatusCode::CREATED, Json(provider)))
}

/// GET /api/providers/:id - Get provider by ID
pub async fn get_provider_by_id(
    Extension(state): Extension<Arc<AppState>>,
    Path(provider_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let provider = ProvidersService::new(state.db.clone())
        .get_provider_by_id(provider_id)
        .await?;
    Ok(Json(provider))
}

/// PUT /api/providers/:id - Update provider
pub async fn update_provider(
    Extension(state): Extension<Arc<AppState>>,
    Path(provider_id): Path<i64>,
    JsonBody(fields): JsonBody<RawFields>,
) -> Result<impl IntoResponse, ApiError> {
    let provider = ProvidersService::new(state.db.clone())
        .update_provider(provider_id, &fields)
        .await?;
    Ok(Json(provider))
}

/// DELETE /api/providers/:id - Delete provider
pub async fn delete_provider(
    Extension(state): Extension<Arc<AppState>>,
    Path(provider_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    ProvidersService::new(state.db.clone())
        .delete_provider(provider_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
