//! API Routes
//!
//! Configures the Axum router with all movie catalog endpoints.

use std::any::Any;

use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use super::handlers::{
    create_movie_handler, delete_movie_handler, fallback_handler, get_movie_handler,
    list_movies_handler, method_not_allowed_handler, AppState,
};
use crate::error::MovieError;

/// Content type stamped on every response
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /movies` - List movies, optionally filtered with `?year=`
/// - `POST /movies` - Create a movie
/// - `GET /movies/:id` - Retrieve a movie by id
/// - `DELETE /movies/:id` - Delete a movie by id
///
/// Other methods on those paths answer 405, HEAD included since `get`
/// would otherwise serve it. Unmatched paths go to
/// `fallback_handler`.
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Content type: every response is labelled as UTF-8 JSON
/// - Panics: reported as a 500 with the panic message
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    Router::new()
        .route(
            "/movies",
            get(list_movies_handler)
                .head(method_not_allowed_handler)
                .post(create_movie_handler)
                .fallback(method_not_allowed_handler),
        )
        .route(
            "/movies/:id",
            get(get_movie_handler)
                .head(method_not_allowed_handler)
                .delete(delete_movie_handler)
                .fallback(method_not_allowed_handler),
        )
        .fallback(fallback_handler)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_TYPE,
            HeaderValue::from_static(JSON_CONTENT_TYPE),
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Turns a handler panic into an internal error response.
fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unexpected internal failure".to_string()
    };

    MovieError::Internal(message).into_response()
}
