//! Shared application router builder.
//!
//! Provides [`build_app_router`] so both binaries and the integration tests
//! (`tests/common/mod.rs`) use the exact same middleware stack.

use std::time::Duration;

use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE, PRAGMA};
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Header carrying the per-request id in both directions.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the [`Router`] for `config.service` wrapped in the shared stack.
///
/// Each `.layer` wraps everything above it, so CORS is outermost and answers
/// preflights before a request id is assigned. The id is set before the trace
/// span opens, so every log line of the request carries it, and is copied
/// onto the response. The timeout bounds the handler (the generator's file
/// write or the proxy's upstream call); a panic inside it becomes a 500.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let handler_timeout = Duration::from_secs(config.request_timeout_secs);

    routes::service_routes(config.service)
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            handler_timeout,
        ))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(build_cors_layer(config))
        .with_state(state)
}

/// Build the CORS middleware layer from server configuration.
///
/// Panics if any configured origin is invalid so misconfiguration fails at
/// startup. The client sends `Cache-Control` and `Pragma` on real-mode
/// searches, so both are allowed alongside `Content-Type`.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, CACHE_CONTROL, PRAGMA])
        .max_age(Duration::from_secs(3600))
}
