//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use roster_domain::error::RosterError;

/// JSON error body returned by every failing endpoint.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Maps handler failures to an HTTP response with appropriate status code.
pub enum ApiError {
    /// A failure reported by the application layer.
    Domain(RosterError),
    /// The request body could not be read as the expected JSON shape.
    InvalidBody(JsonRejection),
}

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        Self::InvalidBody(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Domain(RosterError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Domain(err) => {
                tracing::error!(
                    error = %err,
                    source = ?std::error::Error::source(&err),
                    "request failed"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            Self::InvalidBody(rejection) => {
                tracing::debug!(%rejection, "rejected request body");
                (StatusCode::BAD_REQUEST, "Invalid request body".to_string())
            }
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}
