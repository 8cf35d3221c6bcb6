use super::handlers;
use axum::{routing::get, Router};

/// Creates the vets router
pub fn vets_routes() -> Router {
    Router::new()
        .route("/api/vets", get(handlers::get_vets).post(handlers::create_vet))
        .route(
            "/api/vets/:id",
            get(handlers::get_vet_by_id)
                .put(handlers::update_vet)
                .delete(handlers::delete_vet),
        )
}
