use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;

use crate::movie::{Movie, by_rating_desc};

/// Message returned by `all_directors` when the store holds no movies at all.
/// Existing clients expect this exact string inside the JSON array.
pub const NO_DIRECTORS_MESSAGE: &str = "There are no directors yet in the database";

/// Errors raised by store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// A panic while holding the lock left the store unusable
    #[error("store lock poisoned")]
    LockPoisoned,
}

/// In-memory movie store, movies bucketed by director
pub struct MovieStore {
    movies: RwLock<HashMap<String, Vec<Movie>>>,
}

impl MovieStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            movies: RwLock::new(HashMap::new()),
        }
    }

    /// Add a movie under its director. A movie whose (title, director) pair
    /// is already present is absorbed silently, whatever its rating.
    /// Returns true if the movie was newly inserted.
    pub fn add(&self, movie: Movie) -> Result<bool, StoreError> {
        let mut movies = self.movies.write().map_err(|_| StoreError::LockPoisoned)?;
        let bucket = movies.entry(movie.director.clone()).or_default();
        if bucket.iter().any(|m| m.key() == movie.key()) {
            return Ok(false);
        }
        bucket.push(movie);
        Ok(true)
    }

    /// All movies for the given director, best rated first. An unknown
    /// director yields an empty list, not an error.
    pub fn list_by_director(&self, director: &str) -> Result<Vec<Movie>, StoreError> {
        let movies = self.movies.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut listed = movies.get(director).cloned().unwrap_or_default();
        listed.sort_by(by_rating_desc);
        Ok(listed)
    }

    /// All director names with at least one movie, in no particular order.
    /// An empty store yields the sentinel message instead of an empty list.
    pub fn all_directors(&self) -> Result<Vec<String>, StoreError> {
        let movies = self.movies.read().map_err(|_| StoreError::LockPoisoned)?;
        if movies.is_empty() {
            return Ok(vec![NO_DIRECTORS_MESSAGE.to_string()]);
        }
        Ok(movies.keys().cloned().collect())
    }
}

impl Default for MovieStore {
    fn default() -> Self {
        Self::new()
    }
}
