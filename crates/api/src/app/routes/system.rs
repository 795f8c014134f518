use axum::http::Uri;
use axum::response::{IntoResponse, Response};

use crate::app::errors::ApiError;

/// Catch-all for requests no route claims.
pub async fn route_not_found(uri: Uri) -> Response {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    ApiError::RouteNotFound(target).into_response()
}
