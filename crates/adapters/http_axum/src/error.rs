//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use persons_domain::error::{PersonsError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`PersonsError`] to an HTTP response with appropriate status code.
pub struct ApiError(PersonsError);

impl From<PersonsError> for ApiError {
    fn from(err: PersonsError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            PersonsError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            PersonsError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            PersonsError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
