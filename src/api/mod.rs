//! API Module
//!
//! HTTP handlers and routing for the movie catalog REST API.
//!
//! # Endpoints
//! - `GET /movies` - List every movie, or `?year=<int>` for one year
//! - `GET /movies/:id` - Retrieve a movie by id
//! - `POST /movies` - Create a movie
//! - `DELETE /movies/:id` - Delete a movie by id

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
