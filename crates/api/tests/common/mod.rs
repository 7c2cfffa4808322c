#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use reelmock_api::config::{Service, ServerConfig};
use reelmock_api::router::build_app_router;
use reelmock_api::state::AppState;
use reelmock_api::upstream::UpstreamClient;
use reelmock_store::EnvironmentStore;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config(service: Service, env_path: &Path, upstream_base_url: &str) -> ServerConfig {
    ServerConfig {
        service,
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        env_path: env_path.to_path_buf(),
        upstream_base_url: upstream_base_url.to_string(),
        upstream_timeout_secs: 5,
    }
}

/// Build the full application router for `service` through the same builder
/// the binaries use.
pub fn build_test_app(service: Service, env_path: &Path, upstream_base_url: &str) -> Router {
    let config = test_config(service, env_path, upstream_base_url);
    let upstream = UpstreamClient::new(upstream_base_url, Duration::from_secs(5)).unwrap();

    let state = AppState {
        config: Arc::new(config.clone()),
        store: Arc::new(EnvironmentStore::new(env_path)),
        upstream: Arc::new(upstream),
    };

    build_app_router(state, &config)
}

/// Generator app over `env_path`; the upstream is never contacted.
pub fn generator_app(env_path: &Path) -> Router {
    build_test_app(Service::Generator, env_path, "http://127.0.0.1:9")
}

/// Proxy app forwarding to `upstream_base_url`.
pub fn proxy_app(upstream_base_url: &str) -> Router {
    build_test_app(Service::Proxy, Path::new("unused.json"), upstream_base_url)
}

/// Write `doc` as `environment.json` in a fresh temp dir.
pub fn seed_env_file(doc: &Value) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("environment.json");
    std::fs::write(&path, serde_json::to_string_pretty(doc).unwrap()).unwrap();
    (dir, path)
}

pub fn read_env_file(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

/// Serve `router` on an ephemeral loopback port and return its base URL.
pub async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Base URL of a loopback port nothing is listening on.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
