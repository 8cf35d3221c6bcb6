use super::handlers;
use axum::{routing::get, Router};

/// Creates the products router
pub fn products_routes() -> Router {
    Router::new()
        .route(
            "/api/products",
            get(handlers::get_products).post(handlers::create_product),
        )
        .route(
            "/api/products/:id",
            get(handlers::get_product_by_id)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
}
