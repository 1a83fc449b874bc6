use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::spawn_app;

#[tokio::test]
async fn create_then_get_returns_same_user_with_id() {
    let app = spawn_app().await;

    let created = app
        .create(
            "/api/users",
            json!({"name": "ada", "email": "ada@example.com", "password": "pw", "admin": true}),
        )
        .await;
    assert_eq!(
        created,
        json!({"ID": 1, "Name": "ada", "Email": "ada@example.com", "Password": "pw", "Admin": true})
    );

    let resp = app.get("/api/users/1").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json(), created);
}

#[tokio::test]
async fn id_in_body_is_ignored() {
    let app = spawn_app().await;
    let created = app.create("/api/users", json!({"ID": 99, "name": "bob"})).await;
    assert_eq!(created["ID"], 1);
}

#[tokio::test]
async fn duplicate_emails_are_allowed() {
    let app = spawn_app().await;
    app.create("/api/users", json!({"email": "same@example.com"})).await;
    app.create("/api/users", json!({"email": "same@example.com"})).await;

    let all = app.get("/api/users").await.json();
    assert_eq!(all.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn list_is_in_insertion_order_with_or_without_trailing_slash() {
    let app = spawn_app().await;
    assert_eq!(app.get("/api/users").await.json(), json!([]));

    app.create("/api/users", json!({"name": "first"})).await;
    app.create("/api/users/", json!({"name": "second"})).await;

    for uri in ["/api/users", "/api/users/"] {
        let resp = app.get(uri).await;
        assert_eq!(resp.status, StatusCode::OK);
        let names: Vec<_> = resp
            .json()
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["Name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["first", "second"]);
    }
}

#[tokio::test]
async fn missing_user_is_empty_404() {
    let app = spawn_app().await;
    for uri in ["/api/users/7", "/api/users/not-a-number"] {
        let resp = app.get(uri).await;
        assert_eq!(resp.status, StatusCode::NOT_FOUND);
        assert!(resp.body.is_empty());
    }
}

#[tokio::test]
async fn delete_removes_and_echoes_empty_user() {
    let app = spawn_app().await;
    app.create("/api/users", json!({"name": "gone"})).await;

    let resp = app.delete("/api/users/1").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.json(),
        json!({"ID": 0, "Name": "", "Email": "", "Password": "", "Admin": false})
    );
    assert_eq!(app.get("/api/users/1").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_of_unknown_id_succeeds() {
    let app = spawn_app().await;
    assert_eq!(app.delete("/api/users/42").await.status, StatusCode::OK);
    assert_eq!(app.delete("/api/users/abc").await.status, StatusCode::OK);
}

#[tokio::test]
async fn malformed_body_stores_zero_valued_user() {
    let app = spawn_app().await;
    let resp = app
        .send(
            axum::http::Request::post("/api/users")
                .body(axum::body::Body::from("this is not json"))
                .unwrap(),
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.json(),
        json!({"ID": 1, "Name": "", "Email": "", "Password": "", "Admin": false})
    );
}
