use super::services::ClientsService;
use crate::common::{ApiError, AppState, JsonBody, RawFields};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

/// GET /api/clients - List all clients
pub async fn get_clients(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let service = ClientsService::new(state.db.clone());
    let clients = service.get_all_clients().await?;

    Ok(Json(clients))
}

/// POST /api/clients - Create a new client
pub async fn create_client(
    Extension(state): Extension<Arc<AppState>>,
    JsonBody(fields): JsonBody<RawFields>,
) -> Result<impl IntoResponse, ApiError> {
    let service = ClientsService::new(state.db.clone());
    let client = service.create_client(&fields).await?;

    Ok((StatusCode::CREATED, Json(client)))
}

/// GET /api/clients/:id - Get client by ID
pub async fn get_client_by_id(
    Extension(state): Extension<Arc<AppState>>,
    Path(client_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let service = ClientsService::new(state.db.clone());
    let client = service.get_client_by_id(client_id).await?;

    Ok(Json(client))
}

/// PUT /api/clients/:id - Update client
pub async fn update_client(
    Extension(state): Extension<Arc<AppState>>,
    Path(client_id): Path<i64>,
    JsonBody(fields): JsonBody<RawFields>,
) -> Result<impl IntoResponse, ApiError> {
    let service = ClientsService::new(state.db.clone());
    let client = service.update_client(client_id, &fields).await?;

    Ok(Json(client))
}

/// DELETE /api/clients/:id - Delete client
pub async fn delete_client(
    Extension(state): Extension<Arc<AppState>>,
    Path(client_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let service = ClientsService::new(state.db.clone());
    service.delete_client(client_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
