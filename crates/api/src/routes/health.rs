use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Liveness payload for the proxy.
#[derive(Serialize)]
pub struct LivenessResponse {
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// Environment file health for the generator.
#[derive(Serialize)]
pub struct EnvironmentHealth {
    pub ok: bool,
    #[serde(rename = "envPath")]
    pub env_path: String,
    /// Last modification time of the environment file.
    pub mtime: reelmock_store::Timestamp,
}

/// GET /health -- process is up.
async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health -- environment file is readable.
async fn environment_health(State(state): State<AppState>) -> AppResult<Json<EnvironmentHealth>> {
    let env_path = state.store.path();
    let status = state
        .store
        .status()
        .await
        .map_err(|e| AppError::from_store(env_path, e))?;

    Ok(Json(EnvironmentHealth {
        ok: true,
        env_path: env_path.display().to_string(),
        mtime: status.modified_at,
    }))
}

pub fn liveness_router() -> Router<AppState> {
    Router::new().route("/health", get(liveness))
}

pub fn environment_router() -> Router<AppState> {
    Router::new().route("/health", get(environment_health))
}
