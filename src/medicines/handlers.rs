use super::services::MedicinesService;
use crate::common::{ApiError, AppState, JsonBody, RawFields};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

/// GET /api/medicines - List all medicines
pub async fn get_medicines(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let medicines = MedicinesService::new(state.db.clone())
        .get_all_medicines()
        .await?;
    Ok(Json(medicines))
}

/// POST /api/medicines - Create a new medicine
pub async fn create_medicine(
    Extension(state): Extension<Arc<AppState>>,
    JsonBody(fields): JsonBody<RawFields>,
) -> Result<impl IntoResponse, ApiError> {
    let medicine = MedicinesService::new(state.db.clone())
        .create_medicine(&fields)
        .await?;
    Ok((StatusCode::CREATED, Json(medicine)))
}

/// GET /api/medicines/:id - Get medicine by ID
pub async fn get_medicine_by_id(
    Extension(state): Extension<Arc<AppState>>,
    Path(medicine_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let medicine = MedicinesService::new(state.db.clone())
        .get_medicine_by_id(medicine_id)
        .await?;
    Ok(Json(medicine))
}

/// PUT /api/medicines/:id - Update medicine
pub async fn update_medicine(
    Extension(state): Extension<Arc<AppState>>,
    Path(medicine_id): Path<i64>,
    JsonBody(fields): JsonBody<RawFields>,
) -> Result<impl IntoResponse, ApiError> {
    let medicine = MedicinesService::new(state.db.clone())
        .update_medicine(medicine_id, &fields)
        .await?;
    Ok(Json(medicine))
}

/// DELETE /api/medicines/:id - Delete medicine
pub async fn delete_medicine(
    Extension(state): Extension<Arc<AppState>>,
    Path(medicine_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    MedicinesService::new(state.db.clone())
        .delete_medicine(medicine_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
