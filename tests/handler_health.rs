mod common;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (server, state) = common::create_test_server();
    state.registry.encode("https://example.com").await.unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["storage"]["status"], "ok");
    assert_eq!(json["checks"]["storage"]["message"], "1 mappings");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let (server, _state) = common::create_test_server();

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json["checks"].get("storage").is_some());
}
