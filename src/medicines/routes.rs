use super::handlers;
use axum::{routing::get, Router};

/// Creates the medicines router
pub fn medicines_routes() -> Router {
    Router::new()
        .route(
            "/api/medicines",
            get(handlers::get_medicines).post(handlers::create_medicine),
        )
        .route(
            "/api/medicines/:id",
            get(handlers::get_medicine_by_id)
                .put(handlers::update_medicine)
                .delete(handlers::delete_medicine),
        )
}
