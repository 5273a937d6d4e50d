//! Movie Hub - A small in-memory movie catalog
//!
//! Serves list, year filter, lookup, create and delete over HTTP with JSON payloads.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::{MovieError, Result};
pub use models::Movie;
pub use store::MovieStore;
