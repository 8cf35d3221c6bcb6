use super::handlers;
use axum::{routing::get, Router};

/// Creates the providers router
pub fn providers_routes() -> Router {
    Router::new()
        .route(
            "/api/providers",
            get(handlers::get_providers).post(handlers::create_provider),
        )
        .route(
            "/api/providers/:id",
            get(handlers::get_provider_by_id)
                .put(handlers::update_provider)
                .delete(handlers::delete_provider),
        )
}
