mod common;

use axum::http::{Method, StatusCode};
use linkhash::utils::code_generator::{derive_short_code, is_short_code};
use serde_json::json;
use std::sync::Arc;

fn assert_cors_headers(response: &axum_test::TestResponse) {
    assert_eq!(response.header("access-control-allow-origin"), "*");
    assert_eq!(
        response.header("access-control-allow-methods"),
        "POST, GET, OPTIONS"
    );
    assert_eq!(
        response.header("access-control-allow-headers"),
        "Content-Type"
    );
    assert_eq!(response.header("content-type"), "application/json");
}

#[tokio::test]
async fn test_shorten_success() {
    let server = common::server(common::cache_only_state());

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/page" }))
        .await;

    response.assert_status_ok();
    assert_cors_headers(&response);

    let json = response.json::<serde_json::Value>();
    let short_url = json["short_url"].as_str().unwrap();
    let code = common::code_of(short_url);

    assert!(is_short_code(&code));
    assert_eq!(code, derive_short_code("https://example.com/page"));
}

#[tokio::test]
async fn test_shorten_is_idempotent() {
    let server = common::server(common::cache_only_state());

    let first = server
        .post("/shorten")
        .json(&json!({ "url": "https://dedup.example" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/shorten")
        .json(&json!({ "url": "https://dedup.example" }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(first["short_url"], second["short_url"]);
}

#[tokio::test]
async fn test_shorten_ignores_content_type() {
    let server = common::server(common::cache_only_state());

    let response = server
        .post("/shorten")
        .text(r#"{"url":"https://example.com/plain"}"#)
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_shorten_missing_url() {
    let server = common::server(common::cache_only_state());

    let response = server.post("/shorten").json(&json!({})).await;

    response.assert_status_bad_request();
    assert_cors_headers(&response);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let server = common::server(common::cache_only_state());

    let response = server.post("/shorten").json(&json!({ "url": "" })).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_malformed_body() {
    let server = common::server(common::cache_only_state());

    let response = server.post("/shorten").text("{not json").await;
    response.assert_status_bad_request();

    let response = server
        .post("/shorten")
        .json(&json!(["https://example.com"]))
        .await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_preflight() {
    let server = common::server(common::cache_only_state());

    let response = server.method(Method::OPTIONS, "/shorten").await;

    response.assert_status_ok();
    assert_cors_headers(&response);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_shorten_wrong_method() {
    let server = common::server(common::cache_only_state());

    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let response = server.method(method, "/shorten").await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        assert_cors_headers(&response);
    }
}

#[tokio::test]
async fn test_shorten_persists_to_store() {
    let repo = Arc::new(common::InMemoryRepository::new());
    let server = common::server(common::state_with_store(repo.clone()));

    let json = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/stored" }))
        .await
        .json::<serde_json::Value>();
    let code = common::code_of(json["short_url"].as_str().unwrap());

    let stored = repo.get(&code).unwrap();
    assert_eq!(stored.original_url, "https://example.com/stored");
    assert_eq!(stored.id, 1);

    server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/stored" }))
        .await
        .assert_status_ok();

    assert_eq!(repo.insert_calls(), 1);
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_shorten_with_unreachable_store() {
    let server = common::server(common::state_with_store(Arc::new(
        common::UnreachableRepository,
    )));

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/degraded" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let code = common::code_of(json["short_url"].as_str().unwrap());
    server
        .get(&format!("/{code}"))
        .await
        .assert_status(StatusCode::FOUND);
}
