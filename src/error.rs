//! Error types for the movie catalog
//!
//! Provides unified error handling using thiserror. Every failure in the
//! crate ends up as a `MovieError`, and `IntoResponse` is the single place
//! where an error becomes an HTTP status and JSON body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

// == Movie Error Enum ==
/// Unified error type for the movie catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MovieError {
    /// No movie stored under the id
    #[error("movie not found")]
    NotFound(i64),

    /// A movie with the id is already stored
    #[error("movie already exists")]
    AlreadyExists(i64),

    /// Path id or query parameter is not a valid literal
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Request body is not a well-formed movie record
    #[error("malformed JSON body: {0}")]
    MalformedBody(String),

    /// One or more field constraints were violated
    #[error("validation error")]
    ValidationFailed(Vec<String>),

    /// Request body was not declared as `application/json`
    #[error("unsupported media type")]
    UnsupportedMediaType,

    /// Path is known but the method is not served there
    #[error("method not allowed for this path")]
    MethodNotAllowed,

    /// No endpoint matches the path
    #[error("unknown endpoint")]
    UnknownEndpoint,

    /// Anything unanticipated
    #[error("{0}")]
    Internal(String),
}

impl MovieError {
    /// HTTP status code this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            MovieError::NotFound(_) | MovieError::UnknownEndpoint => StatusCode::NOT_FOUND,
            MovieError::AlreadyExists(_) => StatusCode::CONFLICT,
            MovieError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            MovieError::MalformedBody(_) | MovieError::ValidationFailed(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            MovieError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            MovieError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            MovieError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for MovieError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(error = %self, "request failed");
        }

        let body = match self {
            MovieError::ValidationFailed(details) => {
                ErrorResponse::with_details(status.as_u16(), "validation error", details)
            }
            other => ErrorResponse::new(status.as_u16(), other.to_string()),
        };

        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the movie catalog.
pub type Result<T> = std::result::Result<T, MovieError>;
