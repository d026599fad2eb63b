use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::error;

use crate::store::MovieStore;

/// GET /director/list/all: every director with at least one movie. An empty
/// store answers with the sentinel message inside the array.
pub async fn list_all(
    State(store): State<Arc<MovieStore>>,
) -> Result<Json<Vec<String>>, StatusCode> {
    match store.all_directors() {
        Ok(directors) => Ok(Json(directors)),
        Err(e) => {
            error!("Failed to list directors: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::movie::Movie;
    use crate::routes;
    use crate::store::MovieStore;

    fn test_app() -> Router {
        routes::router(Arc::new(MovieStore::new()))
    }

    async fn put_movie(app: &Router, title: &str, rating: f64, director: &str) {
        let movie = Movie {
            title: title.to_string(),
            rating,
            director: director.to_string(),
        };
        let request = Request::builder()
            .method("PUT")
            .uri("/movie/add")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&movie).unwrap()))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    async fn get_directors_body(app: &Router) -> String {
        let request = Request::builder()
            .uri("/director/list/all")
            .body(Body::empty())
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_no_data_returns_sentinel_message() {
        let app = test_app();

        let body = get_directors_body(&app).await;

        assert_eq!(body, "[\"There are no directors yet in the database\"]");
    }

    #[tokio::test]
    async fn test_one_movie_returns_its_director() {
        let app = test_app();
        put_movie(&app, "Movie Title", 7.0, "Director One").await;

        let directors: Vec<String> =
            serde_json::from_str(&get_directors_body(&app).await).unwrap();

        assert_eq!(directors, vec!["Director One".to_string()]);
    }

    #[tokio::test]
    async fn test_many_movies_each_director_listed_once() {
        let app = test_app();
        put_movie(&app, "Title 1", 5.0, "Director One").await;
        put_movie(&app, "Title 2", 5.7, "Director One").await;
        put_movie(&app, "Title 6", 9.0, "Director Two").await;
        put_movie(&app, "Title 7", 3.7, "Director Two").await;

        let mut directors: Vec<String> =
            serde_json::from_str(&get_directors_body(&app).await).unwrap();
        directors.sort();

        assert_eq!(
            directors,
            vec!["Director One".to_string(), "Director Two".to_string()]
        );
    }
}
