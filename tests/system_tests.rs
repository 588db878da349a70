//! Integration tests for system status, tool configuration, export and user
//! endpoints.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use knox::config::Config;
use tower::ServiceExt;

async fn spawn_app() -> Router {
    let mut config = Config::default();
    config.catalog.default_user = None;

    let state = knox::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    knox::api::router(state)
}

async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("Content-Type", "application/json");
    }

    let response = app
        .clone()
        .oneshot(
            builder
                .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn json(body: &str) -> serde_json::Value {
    serde_json::from_str(body).unwrap()
}

#[tokio::test]
async fn test_get_system_status() {
    let app = spawn_app().await;

    let (status, body) = request(&app, "GET", "/api/system-status", None).await;
    assert_eq!(status, StatusCode::OK);

    let body = json(&body);
    assert_eq!(body["id"], 1);
    assert_eq!(body["protection"], true);
    assert_eq!(body["vpn"], true);
    assert_eq!(body["maxMode"], false);
    assert_eq!(body["autopilot"], true);
    assert_eq!(body["threatsDetected"], 2);
    assert!(body["lastScan"].is_string());
}

#[tokio::test]
async fn test_partial_system_status_update() {
    let app = spawn_app().await;

    let (status, body) = request(
        &app,
        "PATCH",
        "/api/system-status",
        Some(r#"{"maxMode": true}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let body = json(&body);
    assert_eq!(body["maxMode"], true);
    assert_eq!(body["protection"], true);
    assert_eq!(body["vpn"], true);
    assert_eq!(body["autopilot"], true);
    assert_eq!(body["threatsDetected"], 2);

    let (_, body) = request(&app, "GET", "/api/system-status", None).await;
    assert_eq!(json(&body)["maxMode"], true);
}

#[tokio::test]
async fn test_system_status_rejects_bad_payloads() {
    let app = spawn_app().await;

    for payload in [
        r#"{"vpn": null}"#,
        r#"{"vpn": "off"}"#,
        r#"{"threatsDetected": "many"}"#,
        r#"{"lastScan": "yesterday"}"#,
        r#"{"shields": true}"#,
        "not json",
    ] {
        let (status, body) = request(&app, "PATCH", "/api/system-status", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {payload}");
        assert_eq!(json(&body)["error"], "Invalid system status data");
    }

    let (_, body) = request(&app, "GET", "/api/system-status", None).await;
    assert_eq!(json(&body)["vpn"], true);
}

#[tokio::test]
async fn test_tool_config_round_trip() {
    let app = spawn_app().await;

    let (status, body) = request(&app, "GET", "/api/tool-config/4/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body), serde_json::json!({}));

    let (status, first) = request(
        &app,
        "POST",
        "/api/tool-config",
        Some(r#"{"toolId": 4, "userId": 1, "config": "{\"autoScan\":true}"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let first = json(&first);
    assert_eq!(first["toolId"], 4);
    assert_eq!(first["userId"], 1);
    assert!(first["createdAt"].is_string());

    let (status, second) = request(
        &app,
        "POST",
        "/api/tool-config",
        Some(r#"{"toolId": 4, "userId": 1, "config": "{\"autoScan\":false}"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let second = json(&second);
    assert_ne!(first["id"], second["id"]);

    let (status, stored) = request(&app, "GET", "/api/tool-config/4/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let stored = json(&stored);
    assert_eq!(stored["id"], second["id"]);
    assert_eq!(stored["config"], r#"{"autoScan":false}"#);

    let (status, body) = request(&app, "GET", "/api/tool-config/four/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body), serde_json::json!({}));
}

#[tokio::test]
async fn test_tool_config_validation() {
    let app = spawn_app().await;

    for payload in [
        r#"{"toolId": 4, "userId": 1}"#,
        r#"{"toolId": "4", "userId": 1, "config": "{}"}"#,
        r#"{"toolId": 4, "userId": null, "config": "{}"}"#,
        r#"{"toolId": 4, "userId": 1, "config": {"autoScan": true}}"#,
    ] {
        let (status, body) = request(&app, "POST", "/api/tool-config", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {payload}");
        assert_eq!(json(&body)["error"], "Invalid configuration data");
    }
}

#[tokio::test]
async fn test_export_json() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/export/json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(!body["tools"].as_array().unwrap().is_empty());
    assert!(body["systemStatus"].is_object());
    assert!(body["exportedAt"].is_string());
}

#[tokio::test]
async fn test_export_csv() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/export/csv")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"knox-export.csv\""
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert_eq!(body.lines().next(), Some("Name,Category,Status,Description"));
    assert_eq!(body.lines().count(), 81);
}

#[tokio::test]
async fn test_export_unknown_format() {
    let app = spawn_app().await;

    let (status, body) = request(&app, "GET", "/api/export/xyz", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json(&body)["error"], "Unsupported export format");
}

#[tokio::test]
async fn test_users() {
    let app = spawn_app().await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/users",
        Some(r#"{"username": "analyst", "password": "s3cret"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let user = json(&body);
    assert_eq!(user["id"], 1);
    assert_eq!(user["username"], "analyst");
    assert!(user.get("password").is_none());

    let (status, body) = request(&app, "GET", "/api/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["username"], "analyst");

    let (status, _) = request(
        &app,
        "POST",
        "/api/users",
        Some(r#"{"username": "analyst", "password": "other"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = request(
        &app,
        "POST",
        "/api/users",
        Some(r#"{"username": "  ", "password": "x"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = request(&app, "GET", "/api/users/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_default_user_is_seeded() {
    let state = knox::api::create_app_state_from_config(Config::default(), None)
        .await
        .expect("Failed to create app state");

    let user = state.store().get_user(1).await.expect("default user missing");
    assert_eq!(user.username, "operator");
}
