use super::handlers;
use axum::{routing::get, Router};

/// Creates the pets router
pub fn pets_routes() -> Router {
    Router::new()
        .route("/api/pets", get(handlers::get_pets).post(handlers::create_pet))
        .route(
            "/api/pets/:id",
            get(handlers::get_pet_by_id)
                .put(handlers::update_pet)
                .delete(handlers::delete_pet),
        )
}
