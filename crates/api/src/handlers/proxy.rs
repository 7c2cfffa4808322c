//! Handler for the pass-through proxy service.

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::error::AppResult;
use crate::handlers::MovieQuery;
use crate::state::AppState;

/// Query used when `q` is missing or empty.
pub const DEFAULT_QUERY: &str = "The Matrix";

/// Upstream body wrapped with where it came from.
#[derive(Debug, Serialize)]
pub struct ProxyResponse {
    pub source: String,
    pub query: String,
    pub results: Value,
}

/// GET /api/movies
///
/// Forwards `q` to the upstream search API and relays its JSON verbatim under
/// `results`. Any upstream failure becomes a 500.
pub async fn search_movies(
    State(state): State<AppState>,
    Query(params): Query<MovieQuery>,
) -> AppResult<Json<ProxyResponse>> {
    let query = params
        .q
        .filter(|q| !q.is_empty())
        .unwrap_or_else(|| DEFAULT_QUERY.to_string());

    let results = state.upstream.search(&query).await?;

    Ok(Json(ProxyResponse {
        source: state.upstream.source().to_string(),
        query,
        results,
    }))
}
