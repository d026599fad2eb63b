use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A movie record as received and served over HTTP
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub rating: f64,
    pub director: String,
}

impl Movie {
    /// Identity of this movie for deduplication
    pub fn key(&self) -> MovieKey<'_> {
        MovieKey {
            title: &self.title,
            director: &self.director,
        }
    }
}

/// Deduplication key: (title, director) only. Rating is not part of a movie's
/// identity, so re-adding the same movie with a different rating is still a
/// duplicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MovieKey<'a> {
    pub title: &'a str,
    pub director: &'a str,
}

/// Sort comparator: highest rating first
pub fn by_rating_desc(a: &Movie, b: &Movie) -> Ordering {
    b.rating.total_cmp(&a.rating)
}
