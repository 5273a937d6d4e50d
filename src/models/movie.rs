//! Movie record
//!
//! The unit stored in the catalog and returned by every read endpoint.

use serde::{Deserialize, Serialize};

/// A single catalog entry, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Caller-supplied identifier, unique in the store
    pub id: i64,
    /// Display title
    pub title: String,
    /// Release year
    pub year: i32,
}

impl Movie {
    /// Creates a new Movie
    pub fn new(id: i64, title: impl Into<String>, year: i32) -> Self {
        Self {
            id,
            title: title.into(),
            year,
        }
    }
}
