//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use tvbridge_domain::error::{
    NotFoundError, NotImplementedError, TvBridgeError, ValidationError,
};

/// JSON error body returned by API endpoints — the envelope without `data`.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

/// Maps [`TvBridgeError`] to an HTTP response with appropriate status code.
pub struct ApiError(TvBridgeError);

impl From<TvBridgeError> for ApiError {
    fn from(err: TvBridgeError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<NotFoundError> for ApiError {
    fn from(err: NotFoundError) -> Self {
        Self(err.into())
    }
}

impl From<NotImplementedError> for ApiError {
    fn from(err: NotImplementedError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            TvBridgeError::Validation(_) => StatusCode::BAD_REQUEST,
            TvBridgeError::NotFound(_) => StatusCode::NOT_FOUND,
            TvBridgeError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            TvBridgeError::Device(err) => {
                tracing::error!(error = %err, "device operation failed");
                StatusCode::BAD_GATEWAY
            }
            TvBridgeError::Transaction(err) => {
                tracing::error!(error = %err, "device transaction failed");
                StatusCode::BAD_GATEWAY
            }
        };

        (
            status,
            Json(ErrorBody {
                message: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
