//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the shared, lock-guarded catalog
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: response envelope and request parsing helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::extract::Request;
use axum::routing::IntoMakeService;
use axum::{Extension, Router, ServiceExt};
use tower::ServiceBuilder;
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;

use catalog_products::Catalog;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// The served application: the router behind trailing-slash normalization.
///
/// Normalization has to wrap the router from the outside; a layer added with
/// `Router::layer` only runs after a route has already been picked.
pub type App = NormalizePath<Router>;

/// Build the full HTTP app around `catalog` (public entrypoint used by `main.rs`).
pub fn build_app(catalog: Catalog) -> App {
    build_app_with_services(Arc::new(services::CatalogService::new(catalog)))
}

/// Build the app around an existing service handle.
pub fn build_app_with_services(services: Arc<services::CatalogService>) -> App {
    let router = routes::router()
        .fallback(routes::system::route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(Extension(services)),
        );
    NormalizePath::trim_trailing_slash(router)
}

/// Adapt the app for `axum::serve`.
pub fn make_service(app: App) -> IntoMakeService<App> {
    ServiceExt::<Request>::into_make_service(app)
}
