//! Store Module
//!
//! Authoritative in-memory registry of movie records keyed by id.

mod movie_store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use movie_store::MovieStore;
