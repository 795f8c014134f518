use axum::{
    routing::{get, put},
    Router,
};

pub mod products;
pub mod system;

/// Router for the product endpoints.
///
/// Unsupported methods on a known path fall through to the same not-found
/// response as unknown paths.
pub fn router() -> Router {
    Router::new()
        .route(
            "/productos",
            get(products::list_products)
                .post(products::create_product)
                .fallback(system::route_not_found),
        )
        .route(
            "/productos/:id",
            put(products::update_product)
                .delete(products::delete_product)
                .fallback(system::route_not_found),
        )
}
