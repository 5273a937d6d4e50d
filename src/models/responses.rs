//! Response DTOs for the movie catalog API
//!
//! Successful reads return `Movie` directly; this module holds the
//! error body shared by every failure response.

use serde::Serialize;

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Mirrors the HTTP status code
    pub status: u16,
    /// Error message describing what went wrong
    pub error: String,
    /// Validation failure messages, only present on 422 validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(status: u16, error: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            details: None,
        }
    }

    /// Creates a new ErrorResponse carrying validation details
    pub fn with_details(status: u16, error: impl Into<String>, details: Vec<String>) -> Self {
        Self {
            status,
            error: error.into(),
            details: Some(details),
        }
    }
}
