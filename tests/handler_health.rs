mod common;

#[tokio::test]
async fn test_health_endpoint_success() {
    let app = common::spawn_app();

    let response = app.server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(
        json["checks"]["click_sinks"]["message"],
        "Sinks: links, click_log"
    );
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_without_click_log() {
    let app = common::spawn_app_without_click_log();

    let json = app.server.get("/health").await.json::<serde_json::Value>();

    assert_eq!(json["checks"]["click_sinks"]["message"], "Sinks: links");
}

#[tokio::test]
async fn test_health_store_unavailable() {
    let server = common::spawn_app_with_broken_store();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}
