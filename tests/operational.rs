use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::json;

mod common;
use common::spawn_app;

#[tokio::test]
async fn health_and_version() {
    let app = spawn_app().await;
    assert_eq!(app.get("/health").await.json(), json!({"status": "ok"}));
    let version = app.get("/version").await.json();
    assert_eq!(version["name"], "quiz-backend");
}

#[tokio::test]
async fn ready_reports_store_state() {
    let app = spawn_app().await;
    let resp = app.get("/ready").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json(), json!({"status": "ok", "database": "ok"}));

    app.store.pool().close().await;
    let resp = app.get("/ready").await;
    assert_eq!(resp.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(resp.json()["database"], "unavailable");
}

#[tokio::test]
async fn store_fault_is_not_reported_as_not_found() {
    let app = spawn_app().await;
    app.store.pool().close().await;

    let resp = app.get("/api/users").await;
    assert_eq!(resp.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(resp.json()["error"]["code"], "store_unavailable");

    assert_eq!(app.get("/api/users/1").await.status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn any_origin_is_allowed() {
    let app = spawn_app().await;
    let resp = app
        .send(
            Request::builder()
                .method(Method::GET)
                .uri("/api/genres")
                .header(header::ORIGIN, "http://quiz.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

    let preflight = app
        .send(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/questions/1")
                .header(header::ORIGIN, "http://quiz.example")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(preflight.status, StatusCode::OK);
    assert_eq!(preflight.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let app = spawn_app().await;
    let big = "x".repeat(2 * 1024 * 1024);
    let resp = app.post("/api/users", json!({"name": big})).await;
    assert_eq!(resp.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(app.get("/api/users").await.json(), json!([]));
}

#[tokio::test]
async fn openapi_document_lists_api_paths() {
    let app = spawn_app().await;
    let doc = app.get("/api-docs/openapi.json").await.json();
    let paths = doc["paths"].as_object().unwrap();
    for p in ["/api/users", "/api/users/{id}", "/api/genres", "/api/questions/{id}", "/api/scores/{id}"] {
        assert!(paths.contains_key(p), "missing {}", p);
    }
}
