use super::services::PetsService;
use crate::common::{ApiError, AppState, JsonBody, RawFields};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

/// GET /api/pets - List all pets
pub async fn get_pets(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let pets = PetsService::new(state.db.clone()).get_all_pets().await?;
    Ok(Json(pets))
}

/// POST /api/pets - Create a new pet
pub async fn create_pet(
    Extension(state): Extension<Arc<AppState>>,
    JsonBody(fields): JsonBody<RawFields>,
) -> Result<impl IntoResponse, ApiError> {
    let pet = PetsService::new(state.db.clone()).create_pet(&fields).await?;
    Ok((StatusCode::CREATED, Json(pet)))
}

/// GET /api/pets/:id - Get pet by ID
pub async fn get_pet_by_id(
    Extension(state): Extension<Arc<AppState>>,
    Path(pet_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let pet = PetsService::new(state.db.clone()).get_pet_by_id(pet_id).await?;
    Ok(Json(pet))
}

/// PUT /api/pets/:id - Update pet
pub async fn update_pet(
    Extension(state): Extension<Arc<AppState>>,
    Path(pet_id): Path<i64>,
    JsonBody(fields): JsonBody<RawFields>,
) -> Result<impl IntoResponse, ApiError> {
    let pet = PetsService::new(state.db.clone())
        .update_pet(pet_id, &fields)
        .await?;
    Ok(Json(pet))
}

/// DELETE /api/pets/:id - Delete pet
pub async fn delete_pet(
    Extension(state): Extension<Arc<AppState>>,
    Path(pet_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    PetsService::new(state.db.clone()).delete_pet(pet_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
