use super::handlers;
use axum::{routing::get, Router};

/// Creates the home router
pub fn home_routes() -> Router {
    Router::new()
        .route("/api", get(handlers::index))
        .route("/api/choices", get(handlers::get_choices))
}
