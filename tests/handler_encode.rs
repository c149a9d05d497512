mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_encode_success() {
    let (server, _state) = common::create_test_server();

    let response = server
        .post("/api/encode")
        .json(&json!({ "long_url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["long_url"], "https://example.com");

    let short_url = json["short_url"].as_str().unwrap();
    assert!(short_url.starts_with(common::BASE_URL));
    assert_eq!(short_url.len(), common::BASE_URL.len() + 6);

    let key = json["key"].as_str().unwrap();
    assert_eq!(format!("{}{}", common::BASE_URL, key), short_url);
}

#[tokio::test]
async fn test_encode_same_url_twice() {
    let (server, _state) = common::create_test_server();

    let first = server
        .post("/api/encode")
        .json(&json!({ "long_url": "https://example.com/same" }))
        .await
        .json::<serde_json::Value>();

    let second = server
        .post("/api/encode")
        .json(&json!({ "long_url": "https://example.com/same" }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(first["short_url"], second["short_url"]);
}

#[tokio::test]
async fn test_encode_empty_url() {
    let (server, _state) = common::create_test_server();

    let response = server
        .post("/api/encode")
        .json(&json!({ "long_url": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_input");
}

#[tokio::test]
async fn test_encode_missing_url() {
    let (server, _state) = common::create_test_server();

    let response = server.post("/api/encode").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_input");
}

#[tokio::test]
async fn test_encode_null_url() {
    let (server, _state) = common::create_test_server();

    let response = server
        .post("/api/encode")
        .json(&json!({ "long_url": null }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_encode_nul_character() {
    let (server, _state) = common::create_test_server();

    let response = server
        .post("/api/encode")
        .json(&json!({ "long_url": "https://example.com/a\0b" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_input");
}

#[tokio::test]
async fn test_encode_malformed_body() {
    let (server, _state) = common::create_test_server();

    let response = server.post("/api/encode").text("{not json").await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_input");
}
