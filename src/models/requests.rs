//! Request DTOs for the movie catalog API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::Movie;

/// Earliest accepted release year
pub const MIN_YEAR: i32 = 1888;

/// Maximum title length, in characters, after trimming
pub const MAX_TITLE_CHARS: usize = 100;

/// Request body for the create operation (POST /movies)
///
/// Decode with `from_json`, which only accepts a JSON object. Unknown
/// fields are rejected. `title` may be absent so that a missing title is
/// reported by `validate` alongside the other failures.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateMovieRequest {
    /// Identifier to store the movie under
    pub id: i64,
    /// Movie title
    pub title: Option<String>,
    /// Release year
    pub year: i32,
}

impl CreateMovieRequest {
    /// Decodes a request body, refusing anything but a JSON object.
    ///
    /// The derived `Deserialize` would also take the positional array form.
    pub fn from_json(body: &[u8]) -> serde_json::Result<Self> {
        let fields: Map<String, Value> = serde_json::from_slice(body)?;
        serde_json::from_value(Value::Object(fields))
    }

    /// Validates the request data against the given calendar year.
    ///
    /// Every rule is checked; the returned list holds one message per
    /// failed rule and is empty when the request is valid.
    pub fn validate(&self, current_year: i32) -> Vec<String> {
        let mut details = Vec::new();
        if self.id < 0 {
            details.push("id must not be negative".to_string());
        }

        let title = self.title.as_deref().map(str::trim).unwrap_or_default();

        if title.is_empty() {
            details.push("title must not be empty".to_string());
        }
        if title.chars().count() > MAX_TITLE_CHARS {
            details.push(format!(
                "title must not exceed {} characters",
                MAX_TITLE_CHARS
            ));
        }

        let max_year = current_year + 1;
        if !(MIN_YEAR..=max_year).contains(&self.year) {
            details.push(format!(
                "year must be between {} and {}",
                MIN_YEAR, max_year
            ));
        }

        details
    }

    /// Converts the request into the record to store.
    pub fn into_movie(self) -> Movie {
        Movie::new(self.id, self.title.unwrap_or_default(), self.year)
    }
}

/// Query string accepted by GET /movies
///
/// Only `year` is recognised; any other key fails deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YearFilter {
    /// Exact release year to filter on
    pub year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: Option<&str>, year: i32) -> CreateMovieRequest {
        CreateMovieRequest {
            id: 1,
            title: title.map(str::to_string),
            year,
        }
    }

    #[test]
    fn test_create_request_deserialize() {
        let json = r#"{"id": 1, "title": "Movie", "year": 2025}"#;
        let req: CreateMovieRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.id, 1);
        assert_eq!(req.title.as_deref(), Some("Movie"));
        assert_eq!(req.year, 2025);
    }

    #[test]
    fn test_create_request_missing_title_is_none() {
        let json = r#"{"id": 1, "year": 2025}"#;
        let req: CreateMovieRequest = serde_json::from_str(json).unwrap();
        assert!(req.title.is_none());
    }

    #[test]
    fn test_create_request_rejects_unknown_fields() {
        let json = r#"{"id": 1, "title": "Movie", "year": 2025, "rating": 5}"#;
        assert!(serde_json::from_str::<CreateMovieRequest>(json).is_err());
    }

    #[test]
    fn test_create_request_rejects_wrong_types() {
        let json = r#"{"id": "one", "title": "Movie", "year": 2025}"#;
        assert!(serde_json::from_str::<CreateMovieRequest>(json).is_err());
    }

    #[test]
    fn test_from_json_accepts_object() {
        let req = CreateMovieRequest::from_json(br#"{"id":2,"title":"Movie","year":2020}"#).unwrap();
        assert_eq!(req.id, 2);
        assert_eq!(req.year, 2020);
    }

    #[test]
    fn test_from_json_rejects_array() {
        assert!(CreateMovieRequest::from_json(br#"[7,"Movie",2020]"#).is_err());
        assert!(CreateMovieRequest::from_json(b"null").is_err());
    }

    #[test]
    fn test_validate_negative_id() {
        let req = CreateMovieRequest {
            id: -1,
            title: Some("Movie".to_string()),
            year: 2000,
        };
        assert_eq!(req.validate(2025), vec!["id must not be negative"]);
    }

    #[test]
    fn test_validate_valid_request() {
        assert!(request(Some("Movie"), 2000).validate(2025).is_empty());
    }

    #[test]
    fn test_validate_blank_title() {
        let details = request(Some("   "), 2000).validate(2025);
        assert_eq!(details, vec!["title must not be empty"]);
    }

    #[test]
    fn test_validate_missing_title() {
        let details = request(None, 2000).validate(2025);
        assert_eq!(details, vec!["title must not be empty"]);
    }

    #[test]
    fn test_validate_title_too_long() {
        let title = "x".repeat(MAX_TITLE_CHARS + 1);
        let details = request(Some(&title), 2000).validate(2025);
        assert_eq!(details, vec!["title must not exceed 100 characters"]);
    }

    #[test]
    fn test_validate_title_length_counts_characters() {
        let title = "é".repeat(MAX_TITLE_CHARS);
        assert!(request(Some(&title), 2000).validate(2025).is_empty());
    }

    #[test]
    fn test_validate_year_bounds() {
        assert!(request(Some("Movie"), MIN_YEAR).validate(2025).is_empty());
        assert!(request(Some("Movie"), 2026).validate(2025).is_empty());

        let details = request(Some("Movie"), 2027).validate(2025);
        assert_eq!(details, vec!["year must be between 1888 and 2026"]);

        let details = request(Some("Movie"), 1887).validate(2025);
        assert_eq!(details, vec!["year must be between 1888 and 2026"]);
    }

    #[test]
    fn test_validate_collects_all_failures() {
        let details = request(Some(""), 1800).validate(2025);
        assert_eq!(details.len(), 2);
        assert!(details.contains(&"title must not be empty".to_string()));
        assert!(details.contains(&"year must be between 1888 and 2026".to_string()));
    }

    #[test]
    fn test_into_movie() {
        let movie = request(Some("Movie"), 2000).into_movie();
        assert_eq!(movie, Movie::new(1, "Movie", 2000));
    }
}
