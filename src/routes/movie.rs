use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use tracing::{error, info};

use crate::movie::Movie;
use crate::store::MovieStore;

/// Query parameters for `GET /movie/list`
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub director: Option<String>,
}

/// PUT /movie/add: store a movie, silently absorbing duplicates
pub async fn add(State(store): State<Arc<MovieStore>>, Json(movie): Json<Movie>) -> StatusCode {
    info!("Adding movie '{}' by {}", movie.title, movie.director);

    match store.add(movie) {
        Ok(inserted) => {
            if !inserted {
                info!("Movie already known, ignored");
            }
            StatusCode::OK
        }
        Err(e) => {
            error!("Failed to add movie: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// GET /movie/list?director=NAME: movies for one director, best rated first.
/// A missing `director` parameter reads as a director with no movies.
pub async fn list(
    State(store): State<Arc<MovieStore>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Movie>>, StatusCode> {
    let Some(director) = params.director else {
        return Ok(Json(Vec::new()));
    };

    match store.list_by_director(&director) {
        Ok(movies) => Ok(Json(movies)),
        Err(e) => {
            error!("Failed to list movies for '{}': {}", director, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
