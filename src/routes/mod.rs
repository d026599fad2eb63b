//! HTTP route handlers
//!
//! Each resource gets its own module; `router` wires the handlers onto the
//! shared store.

pub mod director;
pub mod movie;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, put};

use crate::store::MovieStore;

/// Build the application router over a shared store
pub fn router(store: Arc<MovieStore>) -> Router {
    Router::new()
        .route("/movie/add", put(movie::add))
        .route("/movie/list", get(movie::list))
        .route("/director/list/all", get(director::list_all))
        .with_state(store)
}
