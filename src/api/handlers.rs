//! API Handlers
//!
//! HTTP request handlers for each movie catalog endpoint. Handlers parse and
//! validate input, take one store guard per operation, and return
//! `MovieError` for every failure so the response shape is decided in one place.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    body::Bytes,
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, HeaderMap, Method, StatusCode, Uri},
    Json,
};
use chrono::Datelike;
use tracing::{debug, info, warn};

use crate::error::{MovieError, Result};
use crate::models::{CreateMovieRequest, Movie, YearFilter};
use crate::store::MovieStore;

/// Media type a create request body must be declared with
const JSON_MEDIA_TYPE: &str = "application/json";

/// Application state shared across all handlers.
///
/// Contains the movie store wrapped in Arc<RwLock<>> for thread-safe access.
#[derive(Clone, Default)]
pub struct AppState {
    /// Thread-safe movie store
    pub store: Arc<RwLock<MovieStore>>,
}

impl AppState {
    /// Creates a new AppState with the given movie store.
    pub fn new(store: MovieStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

/// Parses a path segment as a non-negative integer id.
fn parse_id(raw: &str) -> Result<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MovieError::MalformedInput(format!(
            "movie id must be a non-negative integer, got '{}'",
            raw
        )));
    }
    raw.parse()
        .map_err(|_| MovieError::MalformedInput(format!("movie id '{}' is out of range", raw)))
}

/// Handler for GET /movies and GET /movies?year=<int>
///
/// Without a query string every movie is returned; with `year` only the
/// movies released that year. Any other query is a client error.
pub async fn list_movies_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<YearFilter>, QueryRejection>,
) -> Result<Json<Vec<Movie>>> {
    let Query(filter) = query.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "rejected movie list query");
        MovieError::MalformedInput(rejection.body_text())
    })?;

    let store = state.store.read().await;
    let movies = match filter.year {
        Some(year) => store.list_by_year(year),
        None => store.list_all(),
    };

    debug!(year = ?filter.year, count = movies.len(), "listed movies");
    Ok(Json(movies))
}

/// Handler for GET /movies/:id
pub async fn get_movie_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<Movie>> {
    let Path(raw) = path.map_err(|rejection| MovieError::MalformedInput(rejection.body_text()))?;
    let id = parse_id(&raw)?;

    let movie = state.store.read().await.get(id)?;

    debug!(id, "fetched movie");
    Ok(Json(movie))
}

/// Handler for POST /movies
///
/// Checks run in order: declared media type, JSON shape, then field
/// validation, which reports every failed rule at once.
pub async fn create_movie_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Movie>)> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    let is_json = content_type
        .map(|value| value.trim().eq_ignore_ascii_case(JSON_MEDIA_TYPE))
        .unwrap_or(false);
    if !is_json {
        warn!(content_type = ?content_type, "rejected create with unsupported media type");
        return Err(MovieError::UnsupportedMediaType);
    }

    let req = CreateMovieRequest::from_json(&body).map_err(|err| {
        warn!(error = %err, "rejected malformed movie body");
        MovieError::MalformedBody(err.to_string())
    })?;

    let details = req.validate(chrono::Local::now().year());
    if !details.is_empty() {
        warn!(id = req.id, ?details, "movie failed validation");
        return Err(MovieError::ValidationFailed(details));
    }

    let movie = req.into_movie();
    state.store.write().await.create(movie.clone())?;

    info!(id = movie.id, title = %movie.title, year = movie.year, "created movie");
    Ok((StatusCode::CREATED, Json(movie)))
}

/// Handler for DELETE /movies/:id
pub async fn delete_movie_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<StatusCode> {
    let Path(raw) = path.map_err(|rejection| MovieError::MalformedInput(rejection.body_text()))?;
    let id = parse_id(&raw)?;

    state.store.write().await.delete(id)?;

    info!(id, "deleted movie");
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for a known path requested with an unsupported method
pub async fn method_not_allowed_handler(method: Method, uri: Uri) -> MovieError {
    debug!(%method, path = uri.path(), "method not allowed");
    MovieError::MethodNotAllowed
}

/// Handler for every path no route matches
///
/// GET reports an unknown endpoint. DELETE below `/movies/` means a
/// malformed id, and any other method is not allowed.
pub async fn fallback_handler(method: Method, uri: Uri) -> MovieError {
    debug!(%method, path = uri.path(), "no route matched");
    if method == Method::GET {
        MovieError::UnknownEndpoint
    } else if method == Method::DELETE && uri.path().starts_with("/movies/") {
        MovieError::MalformedInput(format!("'{}' is not a movie path", uri.path()))
    } else {
        MovieError::MethodNotAllowed
    }
}
