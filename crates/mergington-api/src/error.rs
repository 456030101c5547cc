//! Error types for the HTTP API layer.
//!
//! [`ApiError`] converts registry failures into HTTP responses via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Every
//! error body has the shape `{"detail": "..."}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mergington_core::RegistryError;
use mergington_types::ErrorResponse;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A registry operation was rejected.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl ApiError {
    /// The HTTP status this error maps to.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Registry(RegistryError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Registry(
                RegistryError::AlreadyRegistered { .. }
                | RegistryError::CapacityExceeded { .. }
                | RegistryError::NotRegistered { .. },
            ) => StatusCode::BAD_REQUEST,
            Self::Registry(RegistryError::InvalidSeed { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            detail: self.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}
