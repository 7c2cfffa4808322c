//! Tests for `AppError` to HTTP response mapping.

use std::path::Path;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use reelmock_api::error::{AppError, UPSTREAM_FAILURE_MESSAGE};
use reelmock_api::upstream::UpstreamError;
use reelmock_store::StoreError;
use serde_json::Value;

async fn error_to_parts(err: AppError) -> (StatusCode, Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn bad_request_returns_400() {
    let (status, json) = error_to_parts(AppError::BadRequest("route body must be an object".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "route body must be an object");
}

#[tokio::test]
async fn environment_io_error_returns_500_with_env_path() {
    let path = Path::new("/srv/mock/environment.json");
    let err = AppError::from_store(
        path,
        StoreError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        },
    );

    let (status, json) = error_to_parts(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["ok"], false);
    assert_eq!(json["envPath"], "/srv/mock/environment.json");
    assert!(json["error"].as_str().unwrap().contains("no such file"));
}

#[tokio::test]
async fn malformed_environment_returns_500() {
    let path = Path::new("env.json");
    let err = AppError::from_store(
        path,
        StoreError::Malformed {
            path: path.to_path_buf(),
            reason: "missing field `routes`".into(),
        },
    );

    let (status, json) = error_to_parts(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].as_str().unwrap().contains("routes"));
}

#[tokio::test]
async fn rejected_update_maps_to_bad_request() {
    let err = AppError::from_store(
        Path::new("env.json"),
        StoreError::Rejected("missing field `endpoint`".into()),
    );

    let (status, json) = error_to_parts(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "missing field `endpoint`");
}

#[tokio::test]
async fn upstream_status_error_returns_500_with_details() {
    let err = AppError::from(UpstreamError::Status {
        status: 502,
        body: "bad gateway".into(),
    });

    let (status, json) = error_to_parts(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], UPSTREAM_FAILURE_MESSAGE);
    assert_eq!(json["details"], "Upstream returned HTTP 502: bad gateway");
}
