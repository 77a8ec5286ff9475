//! Mapping from core error kinds to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use metacat::errors::{ErrorKind, MetacatError};

/// Errors surfaced to HTTP callers.
///
/// Decode, validation and field-path errors are client errors and carry
/// their diagnostic message in the response body; anything else is an
/// internal server error. None of these are retried anywhere.
#[derive(Debug)]
pub enum ApiError {
    /// Request body declared a content type the ingestion endpoint does not
    /// accept; rejected before decode is attempted.
    UnsupportedMediaType,
    /// An error from the core crate.
    Core(MetacatError),
}

impl From<MetacatError> for ApiError {
    fn from(err: MetacatError) -> Self {
        ApiError::Core(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::UnsupportedMediaType => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "content must be type application/x-yaml",
            )
                .into_response(),
            ApiError::Core(err) => {
                let status = match err.kind() {
                    ErrorKind::DecodeError
                    | ErrorKind::ValidationError
                    | ErrorKind::InvalidFieldPath
                    | ErrorKind::InvalidOperation => StatusCode::BAD_REQUEST,
                    ErrorKind::EncodingError | ErrorKind::InternalError => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                (status, err.message().to_string()).into_response()
            }
        }
    }
}
