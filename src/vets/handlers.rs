use super::services::VetsService;
use crate::common::{ApiError, AppState, JsonBody, RawFields};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

/// GET /api/vets - List all vets
pub async fn get_vets(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let vets = VetsService::new(state.db.clone()).get_all_vets().await?;
    Ok(Json(vets))
}

/// POST /api/vets - Create a new vet
pub async fn create_vet(
    Extension(state): Extension<Arc<AppState>>,
    JsonBody(fields): JsonBody<RawFields>,
) -> Result<impl IntoResponse, ApiError> {
    let vet = VetsService::new(state.db.clone()).create_vet(&fields).await?;
    Ok((StatusCode::CREATED, Json(vet)))
}

/// GET /api/vets/:id - Get vet by ID
pub async fn get_vet_by_id(
    Extension(state): Extension<Arc<AppState>>,
    Path(vet_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let vet = VetsService::new(state.db.clone()).get_vet_by_id(vet_id).await?;
    Ok(Json(vet))
}

/// PUT /api/vets/:id - Update vet
pub async fn update_vet(
    Extension(state): Extension<Arc<AppState>>,
    Path(vet_id): Path<i64>,
    JsonBody(fields): JsonBody<RawFields>,
) -> Result<impl IntoResponse, ApiError> {
    let vet = VetsService::new(state.db.clone())
        .update_vet(vet_id, &fields)
        .await?;
    Ok(Json(vet))
}

/// DELETE /api/vets/:id - Delete vet
pub async fn delete_vet(
    Extension(state): Extension<Arc<AppState>>,
    Path(vet_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    VetsService::new(state.db.clone()).delete_vet(vet_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
