use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Extension, Path, Query},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use catalog_core::ProductId;

use crate::app::dto::{self, Envelope, Estado};
use crate::app::errors::{Action, ApiError};
use crate::app::services::CatalogService;

/// Query parameter holding the minimum stock filter.
const MIN_STOCK_PARAM: &str = "stock_minimo";

pub async fn list_products(
    Extension(services): Extension<Arc<CatalogService>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let raw = params
        .iter()
        .find(|(k, _)| k == MIN_STOCK_PARAM)
        .map(|(_, v)| v.as_str());

    match dto::parse_min_stock(raw) {
        Some(min) => Envelope::new(
            StatusCode::OK,
            Estado::Ok,
            format!("Lista de productos con stock >= {min}"),
        )
        .datos_recibidos(dto::query_to_json(&params))
        .data(services.list(Some(min)))
        .into_response(),
        None => Envelope::new(StatusCode::OK, Estado::Ok, "Lista completa de productos")
            .data(services.list(None))
            .into_response(),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<CatalogService>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let attributes = match dto::parse_object_body(&headers, &body) {
        Ok(a) => a,
        Err(e) => return e.into_response(),
    };
    let received = Value::Object(attributes.clone());

    match services.create(attributes) {
        Ok(product) => Envelope::new(
            StatusCode::CREATED,
            Estado::Creado,
            "Producto agregado exitosamente.",
        )
        .datos_recibidos(received)
        .recurso(product)
        .with_codigo()
        .into_response(),
        Err(e) => ApiError::from_domain(e, Action::Create).into_response(),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<CatalogService>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let patch = match dto::parse_object_body(&headers, &body) {
        Ok(p) => p,
        Err(e) => return e.into_response(),
    };
    let received = json!({ "id": id, "body": Value::Object(patch.clone()) });
    let id = ProductId::from(id);

    match services.update(&id, patch) {
        Ok(product) => Envelope::new(
            StatusCode::OK,
            Estado::Actualizado,
            format!("Producto con ID {id} actualizado correctamente."),
        )
        .datos_recibidos(received)
        .recurso(product)
        .with_codigo()
        .into_response(),
        Err(e) => ApiError::from_domain(e, Action::Update).into_response(),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<CatalogService>>,
    Path(id): Path<String>,
) -> Response {
    let id = ProductId::from(id);

    match services.delete(&id) {
        Ok(product) => Envelope::new(
            StatusCode::OK,
            Estado::Eliminado,
            format!("Producto con ID {id} eliminado correctamente."),
        )
        .recurso_eliminado(product)
        .with_codigo()
        .into_response(),
        Err(e) => ApiError::from_domain(e, Action::Delete).into_response(),
    }
}
