//! Integration tests for the generator service endpoints.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, generator_app, get, post_json, read_env_file, seed_env_file};
use reelmock_api::router::REQUEST_ID_HEADER;
use serde_json::json;
use tower::ServiceExt;

fn movies_route_body(doc: &serde_json::Value) -> serde_json::Value {
    let response = &doc["routes"][0]["responses"][0];
    let text = response["body"]
        .as_str()
        .or_else(|| response["content"]["data"].as_str())
        .unwrap();
    serde_json::from_str(text).unwrap()
}

// ---------------------------------------------------------------------------
// Test: GET /api/movies
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generate_writes_payload_into_environment_file() {
    let (_dir, path) = seed_env_file(&json!({ "name": "mock", "routes": [] }));

    let response = get(generator_app(&path), "/api/movies?q=Matrix").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["updated"], true);
    assert_eq!(json["envPath"], path.display().to_string());
    assert!(json["envMTime"].is_string());
    assert_eq!(json["payload"]["source"], "mock-generator");
    assert_eq!(json["payload"]["query"], "Matrix");
    assert_eq!(json["payload"]["results"]["ok"], true);

    let records = json["payload"]["results"]["description"].as_array().unwrap();
    assert_eq!(records.len(), 8);
    for record in records {
        assert_eq!(record["photo_url"].as_array().unwrap().len(), 3);
        assert!(record["title"].as_str().unwrap().ends_with("(Matrix)"));
    }

    // The file now serves exactly what the endpoint returned.
    let doc = read_env_file(&path);
    assert_eq!(doc["name"], "mock");
    assert_eq!(doc["routes"].as_array().unwrap().len(), 1);
    assert_eq!(movies_route_body(&doc), json["payload"]);
}

#[tokio::test]
async fn repeated_generation_reuses_the_movies_route() {
    let (_dir, path) = seed_env_file(&json!({ "routes": [] }));

    get(generator_app(&path), "/api/movies?q=one").await;
    let response = get(generator_app(&path), "/api/movies?q=two").await;
    assert_eq!(response.status(), StatusCode::OK);

    let doc = read_env_file(&path);
    assert_eq!(doc["routes"].as_array().unwrap().len(), 1);
    assert_eq!(movies_route_body(&doc)["query"], "two");
}

#[tokio::test]
async fn generation_without_query_uses_empty_query() {
    let (_dir, path) = seed_env_file(&json!({ "routes": [] }));

    let response = get(generator_app(&path), "/api/movies").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["payload"]["query"], "");
}

#[tokio::test]
async fn generation_keeps_structured_encoding() {
    let (_dir, path) = seed_env_file(&json!({
        "routes": [{
            "uuid": "movies",
            "method": "GET",
            "endpoint": "api/movies",
            "responses": [{
                "statusCode": 200,
                "headers": [],
                "content": { "type": "application/json", "data": "{}" }
            }]
        }]
    }));

    let response = get(generator_app(&path), "/api/movies?q=x").await;
    assert_eq!(response.status(), StatusCode::OK);

    let doc = read_env_file(&path);
    let written = &doc["routes"][0]["responses"][0];
    assert_eq!(written["content"]["type"], "application/json");
    assert!(written.get("body").is_none());
    assert!(written.get("bodyType").is_none());
    assert_eq!(movies_route_body(&doc)["query"], "x");
}

#[tokio::test]
async fn generation_on_missing_file_returns_500_with_env_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let response = get(generator_app(&path), "/api/movies?q=x").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["ok"], false);
    assert_eq!(json["envPath"], path.display().to_string());
    assert!(json["error"].as_str().unwrap().contains("missing.json"));
}

#[tokio::test]
async fn generation_on_malformed_file_returns_500() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("environment.json");
    std::fs::write(&path, "[1, 2").unwrap();

    let response = get(generator_app(&path), "/api/movies?q=x").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["ok"], false);
    assert!(json["error"].as_str().unwrap().contains("Malformed"));
}

// ---------------------------------------------------------------------------
// Test: GET /health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_reports_readable_file_and_mtime() {
    let (_dir, path) = seed_env_file(&json!({ "routes": [] }));

    let response = get(generator_app(&path), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["ok"], true);
    assert_eq!(json["envPath"], path.display().to_string());
    assert!(json["mtime"].is_string());
}

#[tokio::test]
async fn health_fails_when_file_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gone.json");

    let response = get(generator_app(&path), "/health").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["ok"], false);
    assert_eq!(json["envPath"], path.display().to_string());
}

// ---------------------------------------------------------------------------
// Test: POST /mocks
// ---------------------------------------------------------------------------

#[tokio::test]
async fn add_mock_appends_route() {
    let (_dir, path) = seed_env_file(&json!({ "routes": [] }));
    let route = json!({
        "method": "get",
        "endpoint": "/api/shows",
        "responses": [{ "statusCode": 200, "body": "[]" }]
    });

    let response = post_json(generator_app(&path), "/mocks", &route).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["added"], "/api/shows");

    let doc = read_env_file(&path);
    let routes = doc["routes"].as_array().unwrap();
    assert_eq!(routes.len(), 1);
    assert!(!routes[0]["uuid"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn add_mock_rejects_non_object_body() {
    let (_dir, path) = seed_env_file(&json!({ "routes": [] }));

    let response = post_json(generator_app(&path), "/mocks", &json!([1, 2])).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn add_mock_rejects_incomplete_route() {
    let (_dir, path) = seed_env_file(&json!({ "routes": [] }));

    let response = post_json(generator_app(&path), "/mocks", &json!({ "method": "get" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(read_env_file(&path)["routes"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: middleware
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let (_dir, path) = seed_env_file(&json!({ "routes": [] }));

    let response = get(generator_app(&path), "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn caller_supplied_request_id_is_echoed() {
    let (_dir, path) = seed_env_file(&json!({ "routes": [] }));

    let request = Request::builder()
        .uri("/health")
        .header(REQUEST_ID_HEADER, "trace-me-123")
        .body(Body::empty())
        .unwrap();
    let response = generator_app(&path).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[REQUEST_ID_HEADER], "trace-me-123");
}

#[tokio::test]
async fn cors_preflight_allows_cache_busting_headers() {
    let (_dir, path) = seed_env_file(&json!({ "routes": [] }));

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/movies")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "GET")
        .header("Access-Control-Request-Headers", "cache-control,pragma")
        .body(Body::empty())
        .unwrap();

    let response = generator_app(&path).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        "http://localhost:5173"
    );
    let allowed = headers
        .get("access-control-allow-headers")
        .unwrap()
        .to_str()
        .unwrap()
        .to_lowercase();
    assert!(allowed.contains("cache-control"), "{allowed}");
    assert!(allowed.contains("pragma"), "{allowed}");
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let (_dir, path) = seed_env_file(&json!({ "routes": [] }));

    let response = get(generator_app(&path), "/nope").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
