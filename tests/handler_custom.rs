mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_custom_alias_success() {
    let (server, state) = common::create_test_server();
    let short_url = state.registry.encode("https://test.com").await.unwrap();
    state.registry.decode(&short_url).await.unwrap();

    let response = server
        .post("/api/custom")
        .json(&json!({ "short_url": short_url, "alias": "myalias" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["short_url"], "http://sho.rt/myalias");
    assert_eq!(json["key"], "myalias");

    assert_eq!(
        state
            .registry
            .get_click_stats("http://sho.rt/myalias")
            .await
            .unwrap(),
        1
    );
    assert!(state.registry.get_click_stats(&short_url).await.is_err());
}

#[tokio::test]
async fn test_custom_alias_invalid() {
    let (server, state) = common::create_test_server();
    let short_url = state.registry.encode("https://test.com").await.unwrap();

    let response = server
        .post("/api/custom")
        .json(&json!({ "short_url": short_url, "alias": "invalid alias!" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_alias");
}

#[tokio::test]
async fn test_custom_alias_unknown_source() {
    let (server, _state) = common::create_test_server();

    let response = server
        .post("/api/custom")
        .json(&json!({ "short_url": "http://sho.rt/nonexistent", "alias": "alias" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "source_not_found");
}

#[tokio::test]
async fn test_custom_alias_taken() {
    let (server, state) = common::create_test_server();
    let s1 = state.registry.encode("https://test1.com").await.unwrap();
    let s2 = state.registry.encode("https://test2.com").await.unwrap();
    state.registry.make_custom(&s1, "alias123").await.unwrap();

    let response = server
        .post("/api/custom")
        .json(&json!({ "short_url": s2, "alias": "alias123" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "alias_taken");
    assert_eq!(json["error"]["details"]["alias"], "alias123");
}

#[tokio::test]
async fn test_custom_alias_missing_field() {
    let (server, state) = common::create_test_server();
    let short_url = state.registry.encode("https://test.com").await.unwrap();

    let response = server
        .post("/api/custom")
        .json(&json!({ "short_url": short_url }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_input");
    assert_eq!(state.registry.get_click_stats(&short_url).await.unwrap(), 0);
}

#[tokio::test]
async fn test_alias_matching_static_route() {
    let (server, state) = common::create_test_server();
    let short_url = state.registry.encode("https://test.com").await.unwrap();

    let response = server
        .post("/api/custom")
        .json(&json!({ "short_url": short_url, "alias": "health" }))
        .await;
    response.assert_status_ok();

    // The static route wins over the redirect.
    let health = server.get("/health").await;
    health.assert_status_ok();
    assert_eq!(health.json::<serde_json::Value>()["status"], "healthy");

    let decoded = server
        .post("/api/decode")
        .json(&json!({ "short_url": "http://sho.rt/health" }))
        .await;
    decoded.assert_status_ok();
    assert_eq!(decoded.json::<serde_json::Value>()["long_url"], "https://test.com");
}
