use axum::body::{to_bytes, Body, Bytes};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use quiz_backend::{app, apply_migrations, AppState, Settings, Store};
use serde_json::Value;
use tower::ServiceExt;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub store: Store,
}

#[allow(dead_code)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Bytes,
}

#[allow(dead_code)]
impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }
}

/// Router over a fresh, migrated in-memory database.
pub async fn spawn_app() -> TestApp {
    let settings = Settings {
        database_url: "sqlite::memory:".into(),
        ..Settings::default()
    };
    let store = Store::connect(&settings).await.expect("failed to open in-memory store");
    apply_migrations(&store).await.expect("failed to migrate");
    let router = app(AppState::new(store.clone()), &settings);
    TestApp { router, store }
}

#[allow(dead_code)]
impl TestApp {
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let resp = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("router is infallible");
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("failed to read body");
        TestResponse { status, headers, body }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(v) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(v.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("failed to build request");
        self.send(req).await
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None).await
    }

    /// POST and return the decoded JSON, asserting 200.
    pub async fn create(&self, uri: &str, body: Value) -> Value {
        let resp = self.post(uri, body).await;
        assert_eq!(resp.status, StatusCode::OK, "POST {} failed", uri);
        resp.json()
    }
}
