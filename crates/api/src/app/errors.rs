use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use catalog_core::{DomainError, ProductId};

use crate::app::dto::{Envelope, Estado};

/// Operation that was looking a product up when it went missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Update,
    Delete,
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Action::Create => "crear",
            Action::Update => "actualizar",
            Action::Delete => "eliminar",
        })
    }
}

/// Request-level failure. Displays as the client-facing `mensaje`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required field missing or blank; the payload is the internal reason.
    #[error("El nombre del producto es obligatorio.")]
    Validation(String),

    #[error("El cuerpo de la solicitud debe ser un objeto JSON válido.")]
    MalformedBody(String),

    #[error("Producto con ID {id} no encontrado para {action}.")]
    NotFound { id: ProductId, action: Action },

    #[error("{0}")]
    Internal(String),

    #[error("Ruta {0} no encontrada.")]
    RouteNotFound(String),
}

impl ApiError {
    /// Translate a domain failure raised while performing `action`.
    pub fn from_domain(err: DomainError, action: Action) -> Self {
        match err {
            DomainError::Validation(msg) => ApiError::Validation(msg),
            DomainError::NotFound(id) => ApiError::NotFound { id, action },
            DomainError::Internal(msg) => ApiError::Internal(msg),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } | ApiError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn estado(&self) -> Estado {
        match self {
            ApiError::Internal(_) => Estado::ErrorFatal,
            _ => Estado::Error,
        }
    }

    pub fn to_envelope(&self) -> Envelope {
        Envelope::new(self.status(), self.estado(), self.to_string()).with_codigo()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation(reason) | ApiError::MalformedBody(reason) => {
                tracing::debug!(%reason, "rejected request body");
            }
            ApiError::NotFound { id, action } => {
                tracing::debug!(product_id = %id, %action, "product not found");
            }
            ApiError::Internal(msg) => tracing::error!(error = %msg, "internal error"),
            ApiError::RouteNotFound(path) => tracing::debug!(%path, "no route matched"),
        }
        self.to_envelope().into_response()
    }
}
