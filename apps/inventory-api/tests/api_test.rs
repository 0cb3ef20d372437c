//! End-to-end tests through the assembled application router.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use chrono::{TimeDelta, TimeZone, Utc};
use core_config::{Environment, app_info, cors::CorsConfig, server::ServerConfig};
use database::ManualClock;
use http_body_util::BodyExt;
use inventory_api::{
    build_router,
    config::{APP_TITLE, Config},
    state::AppState,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt; // For oneshot()

struct TestApp {
    state: AppState,
}

impl TestApp {
    fn new() -> Self {
        Self {
            state: AppState::new(test_config()),
        }
    }

    fn with_clock(clock: Arc<ManualClock>) -> Self {
        Self {
            state: AppState::with_clock(test_config(), clock),
        }
    }

    fn router(&self) -> Router {
        build_router(&self.state).unwrap()
    }

    async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router().oneshot(request).await.unwrap()
    }

    async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn delete(&self, uri: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    async fn post(&self, uri: &str, payload: Value) -> Response<Body> {
        self.send_json("POST", uri, payload).await
    }

    async fn put(&self, uri: &str, payload: Value) -> Response<Body> {
        self.send_json("PUT", uri, payload).await
    }

    async fn send_json(&self, method: &str, uri: &str, payload: Value) -> Response<Body> {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
    }
}

fn test_config() -> Config {
    Config {
        app: app_info!(APP_TITLE),
        server: ServerConfig::default(),
        cors: CorsConfig::default(),
        environment: Environment::Development,
    }
}

async fn json_body(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_root_advertises_version_and_docs() {
    let app = TestApp::new();

    let response = app.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["message"], "Welcome to Sample FastAPI Application");
    assert_eq!(body["version"], "1.0.0");
    assert_eq!(body["docs"], "/docs");
    assert_eq!(body["redoc"], "/redoc");
}

#[tokio::test]
async fn test_health_and_readiness() {
    let app = TestApp::new();

    let response = app.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());

    let response = app.get("/ready").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["items"], "up");
    assert_eq!(body["users"], "up");
}

#[tokio::test]
async fn test_openapi_document_lists_resources() {
    let app = TestApp::new();

    let response = app.get("/api-docs/openapi.json").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let paths = body["paths"].as_object().unwrap();
    for path in ["/items", "/items/{id}", "/users", "/users/username/{username}", "/stats"] {
        assert!(paths.contains_key(path), "missing {path}");
    }
}

#[tokio::test]
async fn test_unknown_route_has_detail() {
    let response = TestApp::new().get("/nope").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["detail"], "Not Found");
}

#[tokio::test]
async fn test_create_item_with_and_without_trailing_slash() {
    let app = TestApp::new();

    let response = app
        .post("/items/", json!({"name": "Book", "price": 19.99, "quantity": 10}))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let item = json_body(response).await;
    assert_eq!(item["price"], 19.99);
    assert_eq!(item["quantity"], 10);
    assert!(item["id"].is_u64());
    assert_eq!(item["created_at"], item["updated_at"]);

    let response = app
        .post("/items", json!({"name": "Pen", "price": 1.5, "quantity": 3}))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.get("/items/").await;
    let listed = json_body(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_item_with_negative_price_is_rejected() {
    let app = TestApp::new();

    let response = app
        .post("/items/", json!({"name": "Bad", "price": -5, "quantity": 2}))
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert!(body["detail"].is_string());

    let response = app.post("/items/", json!({})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_duplicate_user_registration() {
    let app = TestApp::new();
    let payload = json!({"username": "dup", "email": "a@x.com", "password": "p"});

    let response = app.post("/users/", payload.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let user = json_body(response).await;
    assert!(user.get("password").is_none());
    assert_eq!(user["is_active"], true);

    let response = app.post("/users/", payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["detail"], "Username already registered");

    let response = app
        .post(
            "/users/",
            json!({"username": "other", "email": "a@x.com", "password": "p"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["detail"], "Email already registered");

    let response = app
        .post(
            "/users/",
            json!({"username": "third", "email": "invalid-email", "password": "p"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_user_lookups() {
    let app = TestApp::new();
    app.post(
        "/users/",
        json!({"username": "carol", "email": "carol@example.com", "full_name": "Carol", "password": "p"}),
    )
    .await;

    let response = app.get("/users/username/carol").await;
    assert_eq!(response.status(), StatusCode::OK);
    let user = json_body(response).await;
    assert_eq!(user["full_name"], "Carol");

    let response = app.get(&format!("/users/{}", user["id"])).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.get("/users/username/nobody").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(json_body(response).await["detail"].is_string());

    let response = app.get("/users/").await;
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_stats_reflect_items_and_users() {
    let app = TestApp::new();

    let response = app.get("/stats").await;
    let empty = json_body(response).await;
    assert_eq!(empty["total_items"], 0);
    assert_eq!(empty["total_inventory_value"], 0.0);

    app.post("/items/", json!({"name": "Box", "price": 10.0, "quantity": 5}))
        .await;
    app.post(
        "/users/",
        json!({"username": "dave", "email": "dave@example.com", "password": "p"}),
    )
    .await;

    let response = app.get("/stats").await;
    assert_eq!(response.status(), StatusCode::OK);

    let stats = json_body(response).await;
    assert_eq!(stats["total_items"], 1);
    assert_eq!(stats["total_users"], 1);
    assert_eq!(stats["total_inventory_value"], 50.0);
    assert_eq!(stats["active_users"], 1);
}

#[tokio::test]
async fn test_deleted_item_is_gone() {
    let app = TestApp::new();

    let response = app
        .post("/items/", json!({"name": "Temp", "price": 1.0, "quantity": 1}))
        .await;
    let id = json_body(response).await["id"].as_u64().unwrap();

    let response = app.delete(&format!("/items/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.get(&format!("/items/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["detail"], "Item not found");

    let response = app.delete(&format!("/items/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .post("/items/", json!({"name": "Next", "price": 1.0, "quantity": 1}))
        .await;
    let next_id = json_body(response).await["id"].as_u64().unwrap();
    assert!(next_id > id);
}

#[tokio::test]
async fn test_list_items_window() {
    let app = TestApp::new();
    for i in 0..15 {
        app.post(
            "/items/",
            json!({"name": format!("Item {i}"), "price": 1.0, "quantity": 1}),
        )
        .await;
    }

    let response = app.get("/items/?skip=5&limit=5").await;
    assert_eq!(response.status(), StatusCode::OK);

    let names: Vec<String> = json_body(response)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Item 5", "Item 6", "Item 7", "Item 8", "Item 9"]);

    let response = app.get("/items?skip=abc").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app.get("/items/not-a-number").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_item_advances_updated_at() {
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    let clock = Arc::new(ManualClock::new(start));
    let app = TestApp::with_clock(clock.clone());

    let response = app
        .post("/items/", json!({"name": "Lamp", "price": 30.0, "quantity": 2}))
        .await;
    let created = json_body(response).await;
    let id = created["id"].as_u64().unwrap();

    clock.advance(TimeDelta::seconds(90));

    let response = app
        .put(
            &format!("/items/{id}/"),
            json!({"name": "Lamp", "description": "brass", "price": 35.0, "quantity": 2}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = json_body(response).await;
    assert_eq!(updated["created_at"], created["created_at"]);
    assert_ne!(updated["updated_at"], created["updated_at"]);
    assert_eq!(updated["description"], "brass");
    assert_eq!(updated["price"], 35.0);

    let response = app
        .put(
            "/items/4242",
            json!({"name": "Ghost", "price": 1.0, "quantity": 1}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
