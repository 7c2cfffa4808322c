//! Handlers for the mock generator service.
//!
//! Each call synthesizes fresh results and writes them into the mock-server
//! environment file so the mock server replays them on its movies route.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use reelmock_core::movie::SearchEnvelope;
use reelmock_core::synth::{self, DEFAULT_RESULT_COUNT};
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::handlers::MovieQuery;
use crate::state::AppState;

/// Body returned after a successful generation.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub updated: bool,
    #[serde(rename = "envPath")]
    pub env_path: String,
    #[serde(rename = "envMTime")]
    pub env_mtime: reelmock_store::Timestamp,
    pub payload: SearchEnvelope,
}

/// Body returned after a route was appended.
#[derive(Debug, Serialize)]
pub struct AddMockResponse {
    pub success: bool,
    /// Endpoint of the appended route.
    pub added: String,
}

/// GET /api/movies
///
/// Synthesizes [`DEFAULT_RESULT_COUNT`] records for `q` and upserts them as
/// the body of the mock server's movies route.
pub async fn generate_movies(
    State(state): State<AppState>,
    Query(params): Query<MovieQuery>,
) -> AppResult<Json<GenerateResponse>> {
    let query = params.q.unwrap_or_default();
    let records = synth::synthesize(&query, DEFAULT_RESULT_COUNT);
    let payload = SearchEnvelope::generated(query, records);

    let env_path = state.store.path();
    let report = state
        .store
        .upsert_movies(&payload)
        .await
        .map_err(|e| AppError::from_store(env_path, e))?;

    tracing::debug!(
        query = %payload.query,
        results = payload.results.description.len(),
        created = report.outcome.created,
        "Mock movies generated",
    );

    Ok(Json(GenerateResponse {
        updated: true,
        env_path: env_path.display().to_string(),
        env_mtime: report.modified_at,
        payload,
    }))
}

/// POST /mocks
///
/// Appends the route in the request body to the environment file.
pub async fn add_mock(
    State(state): State<AppState>,
    Json(route): Json<Value>,
) -> AppResult<(StatusCode, Json<AddMockResponse>)> {
    if !route.is_object() {
        return Err(AppError::BadRequest(
            "Route definition must be a JSON object".into(),
        ));
    }

    let env_path = state.store.path();
    let route = state
        .store
        .add_route(route)
        .await
        .map_err(|e| AppError::from_store(env_path, e))?;

    Ok((
        StatusCode::CREATED,
        Json(AddMockResponse {
            success: true,
            added: route.endpoint,
        }),
    ))
}
