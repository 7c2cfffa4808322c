//! Route definitions for the movies endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{generator, proxy};
use crate::state::AppState;

/// ```text
/// GET  /api/movies    -> generate_movies
/// POST /mocks         -> add_mock
/// ```
pub fn generator_router() -> Router<AppState> {
    Router::new()
        .route("/api/movies", get(generator::generate_movies))
        .route("/mocks", post(generator::add_mock))
}

/// ```text
/// GET  /api/movies    -> search_movies
/// ```
pub fn proxy_router() -> Router<AppState> {
    Router::new().route("/api/movies", get(proxy::search_movies))
}
