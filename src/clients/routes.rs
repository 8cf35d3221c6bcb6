use super::handlers;
use axum::{routing::get, Router};

/// Creates the clients router
pub fn clients_routes() -> Router {
    Router::new()
        .route(
            "/api/clients",
            get(handlers::get_clients).post(handlers::create_client),
        )
        .route(
            "/api/clients/:id",
            get(handlers::get_client_by_id)
                .put(handlers::update_client)
                .delete(handlers::delete_client),
        )
}
