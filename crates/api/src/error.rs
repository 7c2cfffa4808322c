use std::path::{Path, PathBuf};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use reelmock_store::StoreError;
use serde_json::json;

use crate::upstream::UpstreamError;

/// Message returned to clients when the upstream search API fails.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to fetch movie data";

/// Application-level error type for HTTP handlers.
///
/// Each variant renders the diagnostic body its endpoint family promises:
/// environment failures echo the file path, upstream failures carry the
/// underlying message under `details`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Reading, validating or writing the environment file failed.
    #[error("{source}")]
    Environment {
        env_path: PathBuf,
        #[source]
        source: StoreError,
    },

    /// The upstream search API was unreachable or answered with an error.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Wrap a store failure on `env_path`.
    ///
    /// A rejected mutation is the caller's fault and becomes a 400.
    pub fn from_store(env_path: &Path, err: StoreError) -> Self {
        match err {
            StoreError::Rejected(msg) => Self::BadRequest(msg),
            source => Self::Environment {
                env_path: env_path.to_path_buf(),
                source,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Environment { env_path, source } => {
                tracing::error!(env_path = %env_path.display(), error = %source, "Environment file error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "ok": false,
                        "error": source.to_string(),
                        "envPath": env_path.display().to_string(),
                    }),
                )
            }
            AppError::Upstream(err) => {
                tracing::error!(error = %err, "Error fetching movie data");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": UPSTREAM_FAILURE_MESSAGE,
                        "details": err.to_string(),
                    }),
                )
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": msg, "code": "BAD_REQUEST" }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
