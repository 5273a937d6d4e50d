//! Movie Store Module
//!
//! HashMap-backed registry enforcing id uniqueness on create and existence
//! on read and delete. Callers share it behind a lock; every method here is
//! one logical operation, so holding a single guard per call keeps each
//! check-then-act atomic.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::{MovieError, Result};
use crate::models::Movie;

// == Movie Store ==
/// In-memory movie registry.
#[derive(Debug, Default)]
pub struct MovieStore {
    /// Movies keyed by id
    movies: HashMap<i64, Movie>,
}

impl MovieStore {
    // == Constructor ==
    /// Creates an empty MovieStore.
    pub fn new() -> Self {
        Self::default()
    }

    // == List All ==
    /// Returns every stored movie. Order is not significant.
    pub fn list_all(&self) -> Vec<Movie> {
        self.movies.values().cloned().collect()
    }

    // == List By Year ==
    /// Returns the stored movies released in `year`, possibly none.
    pub fn list_by_year(&self, year: i32) -> Vec<Movie> {
        self.movies
            .values()
            .filter(|movie| movie.year == year)
            .cloned()
            .collect()
    }

    // == Get ==
    /// Retrieves a movie by id.
    pub fn get(&self, id: i64) -> Result<Movie> {
        self.movies
            .get(&id)
            .cloned()
            .ok_or(MovieError::NotFound(id))
    }

    // == Create ==
    /// Inserts a movie, refusing to replace one already stored under its id.
    pub fn create(&mut self, movie: Movie) -> Result<()> {
        match self.movies.entry(movie.id) {
            Entry::Occupied(_) => Err(MovieError::AlreadyExists(movie.id)),
            Entry::Vacant(slot) => {
                slot.insert(movie);
                Ok(())
            }
        }
    }

    // == Delete ==
    /// Removes a movie by id.
    pub fn delete(&mut self, id: i64) -> Result<()> {
        self.movies
            .remove(&id)
            .map(|_| ())
            .ok_or(MovieError::NotFound(id))
    }

    // == Clear ==
    /// Removes every movie.
    pub fn clear(&mut self) {
        self.movies.clear();
    }

    // == Length ==
    /// Returns the number of stored movies.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    // == Is Empty ==
    /// Returns true if no movies are stored.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
