//! Property-Based Tests for Store Module
//!
//! Uses proptest to check the registry contract over generated inputs.

use proptest::prelude::*;
use std::collections::HashMap;

use crate::error::MovieError;
use crate::models::Movie;
use crate::store::MovieStore;

// == Strategies ==
/// Generates plausible movie titles
fn title_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,100}".prop_map(|s| s)
}

/// Generates movies from a narrow year range so year collisions are common
fn movie_strategy() -> impl Strategy<Value = Movie> {
    (0i64..1000, title_strategy(), 1990i32..2000)
        .prop_map(|(id, title, year)| Movie::new(id, title, year))
}

/// Generates a sequence of store operations for testing
#[derive(Debug, Clone)]
enum StoreOp {
    Create(Movie),
    Delete(i64),
}

fn store_op_strategy() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        movie_strategy().prop_map(StoreOp::Create),
        (0i64..1000).prop_map(StoreOp::Delete),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Creating a movie and fetching it by id returns an equal record.
    #[test]
    fn prop_create_then_get_roundtrip(movie in movie_strategy()) {
        let mut store = MovieStore::new();

        store.create(movie.clone()).unwrap();

        let fetched = store.get(movie.id).unwrap();
        prop_assert_eq!(fetched, movie);
    }

    // A duplicate create fails and leaves the original record in place.
    #[test]
    fn prop_duplicate_create_keeps_original(
        original in movie_strategy(),
        title in title_strategy(),
        year in 1888i32..2100
    ) {
        let mut store = MovieStore::new();
        store.create(original.clone()).unwrap();

        let duplicate = Movie::new(original.id, title, year);
        let result = store.create(duplicate);

        prop_assert_eq!(result, Err(MovieError::AlreadyExists(original.id)));
        prop_assert_eq!(store.get(original.id).unwrap(), original);
        prop_assert_eq!(store.len(), 1);
    }

    // Delete removes a present id; deleting an absent id changes nothing.
    #[test]
    fn prop_delete_removes_entry(movie in movie_strategy(), other_id in 1000i64..2000) {
        let mut store = MovieStore::new();
        store.create(movie.clone()).unwrap();

        prop_assert_eq!(store.delete(other_id), Err(MovieError::NotFound(other_id)));
        prop_assert_eq!(store.len(), 1);

        store.delete(movie.id).unwrap();
        prop_assert_eq!(store.get(movie.id), Err(MovieError::NotFound(movie.id)));
        prop_assert_eq!(store.delete(movie.id), Err(MovieError::NotFound(movie.id)));
    }

    // After any sequence of operations the store matches a reference map,
    // and list_by_year returns exactly the movies with that year.
    #[test]
    fn prop_list_by_year_is_exact_subset(
        ops in prop::collection::vec(store_op_strategy(), 1..60),
        year in 1985i32..2005
    ) {
        let mut store = MovieStore::new();
        let mut expected: HashMap<i64, Movie> = HashMap::new();

        for op in ops {
            match op {
                StoreOp::Create(movie) => {
                    let accepted = store.create(movie.clone()).is_ok();
                    prop_assert_eq!(accepted, !expected.contains_key(&movie.id));
                    expected.entry(movie.id).or_insert(movie);
                }
                StoreOp::Delete(id) => {
                    let removed = store.delete(id).is_ok();
                    prop_assert_eq!(removed, expected.remove(&id).is_some());
                }
            }
        }

        prop_assert_eq!(store.len(), expected.len());

        let mut actual = store.list_by_year(year);
        actual.sort_by_key(|m| m.id);
        let mut wanted: Vec<Movie> = expected
            .values()
            .filter(|m| m.year == year)
            .cloned()
            .collect();
        wanted.sort_by_key(|m| m.id);
        prop_assert_eq!(actual, wanted);
    }
}
