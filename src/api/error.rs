use super::protocol::ErrorResponse;
use crate::store::error::StoreError;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Failure of an HTTP request, rendered as an `ErrorResponse` body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request did not conform to the API contract.
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        tracing::debug!("Request failed with {}: {}", status, message);

        let body = ErrorResponse {
            code: i32::from(status.as_u16()),
            message,
        };
        (status, Json(body)).into_response()
    }
}
