//! Request and Response models for the movie catalog API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod movie;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use movie::Movie;
pub use requests::{CreateMovieRequest, YearFilter, MAX_TITLE_CHARS, MIN_YEAR};
pub use responses::ErrorResponse;
