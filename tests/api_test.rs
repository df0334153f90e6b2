//! HTTP tests driving the router end to end.
//!
//! Most tests run against a real SQLite store; store failures are simulated
//! with a service that always errors.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{setup_db, TestDb};
use user_service::api::{create_router, AppState};
use user_service::errors::{AppError, AppResult};
use user_service::services::UserService;
use user_service::{User, UserId};

// =============================================================================
// Test Helpers
// =============================================================================

/// Service whose every call fails like a broken store would.
struct FailingUserService;

fn store_down() -> AppError {
    AppError::Database(sea_orm::DbErr::Custom("connection refused".into()))
}

#[async_trait]
impl UserService for FailingUserService {
    async fn create_user(&self, _name: String) -> AppResult<User> {
        Err(store_down())
    }

    async fn get_user(&self, _id: UserId) -> AppResult<User> {
        Err(store_down())
    }

    async fn get_all_users(&self, _page: i64, _size: i64) -> AppResult<Vec<User>> {
        Err(store_down())
    }

    async fn get_users_by_ids(&self, _ids: Vec<UserId>) -> AppResult<Vec<User>> {
        Err(store_down())
    }
}

fn app(db: &TestDb) -> Router {
    create_router(AppState::from_database(db.database.clone()))
}

fn failing_app(db: &TestDb) -> Router {
    create_router(AppState::new(
        Arc::new(FailingUserService),
        db.database.clone(),
    ))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

async fn create(app: &Router, name: &str) -> Value {
    let (status, body) = send(app.clone(), post_json("/users", json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["user"].clone()
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_user_returns_201() {
    let db = setup_db().await;

    let (status, body) = send(app(&db), post_json("/users", json!({ "name": "Alice" }))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["result"], true);
    assert_eq!(body["user"]["name"], "Alice");
    assert!(body["user"]["id"].as_i64().is_some());
    assert_eq!(body["user"]["created_at"], body["user"]["updated_at"]);
}

#[tokio::test]
async fn test_create_user_accepts_empty_name() {
    let db = setup_db().await;

    let (status, body) = send(app(&db), post_json("/users", json!({ "name": "" }))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["name"], "");
}

#[tokio::test]
async fn test_create_user_rejects_bad_bodies() {
    let db = setup_db().await;

    for payload in [json!({}), json!({ "name": 7 }), json!({ "name": null })] {
        let (status, body) = send(app(&db), post_json("/users", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["result"], false);
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }
}

#[tokio::test]
async fn test_create_user_rejects_malformed_json() {
    let db = setup_db().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\":"))
        .unwrap();

    let (status, _) = send(app(&db), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Get
// =============================================================================

#[tokio::test]
async fn test_get_user_by_id() {
    let db = setup_db().await;
    let app = app(&db);
    let created = create(&app, "Alice").await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(app, get(&format!("/users/{}", id))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], true);
    assert_eq!(body["user"], created);
}

#[tokio::test]
async fn test_get_unknown_user_is_404() {
    let db = setup_db().await;

    let (status, body) = send(app(&db), get("/users/9999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["result"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "user not found");
}

#[tokio::test]
async fn test_get_user_with_non_numeric_id_is_400() {
    let db = setup_db().await;

    let (status, body) = send(app(&db), get("/users/abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "invalid id");
}

#[tokio::test]
async fn test_get_user_with_negative_id_is_400() {
    let db = setup_db().await;

    let (status, body) = send(app(&db), get("/users/-1")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "invalid id");
}

// =============================================================================
// List
// =============================================================================

#[tokio::test]
async fn test_list_users_defaults_to_first_page() {
    let db = setup_db().await;
    let app = app(&db);
    for i in 0..12 {
        create(&app, &format!("user-{}", i)).await;
    }

    let (status, body) = send(app, get("/users")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], true);
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 10);
    assert_eq!(users[0]["name"], "user-11");
}

#[tokio::test]
async fn test_list_users_second_page() {
    let db = setup_db().await;
    let app = app(&db);
    for name in ["A", "B", "C", "D", "E"] {
        create(&app, name).await;
    }

    let (status, body) = send(app, get("/users?page_num=2&page_size=3")).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["B", "A"]);
}

#[tokio::test]
async fn test_list_users_empty_store() {
    let db = setup_db().await;

    let (status, body) = send(app(&db), get("/users")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["users"], json!([]));
}

#[tokio::test]
async fn test_list_users_rejects_unparsable_params() {
    let db = setup_db().await;

    let (status, body) = send(app(&db), get("/users?page_num=abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["result"], false);
}

// =============================================================================
// Batch
// =============================================================================

#[tokio::test]
async fn test_batch_fetch_returns_existing_users_only() {
    let db = setup_db().await;
    let app = app(&db);
    let alice = create(&app, "Alice").await;
    let id = alice["id"].as_i64().unwrap();

    let (status, body) = send(
        app,
        post_json("/users/batch", json!({ "user_ids": [id, 9999] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], true);
    assert_eq!(body["users"], json!([alice]));
}

#[tokio::test]
async fn test_batch_fetch_empty_ids() {
    let db = setup_db().await;

    let (status, body) = send(app(&db), post_json("/users/batch", json!({ "user_ids": [] }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["users"], json!([]));
}

#[tokio::test]
async fn test_batch_fetch_rejects_invalid_body() {
    let db = setup_db().await;

    for payload in [
        json!({}),
        json!({ "user_ids": "1,2" }),
        json!({ "user_ids": [-1] }),
        json!({ "user_ids": [1, -5] }),
        json!({ "user_ids": [9223372036854775808u64] }),
    ] {
        let (status, body) = send(app(&db), post_json("/users/batch", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["result"], false);
    }
}

// =============================================================================
// Store failures
// =============================================================================

#[tokio::test]
async fn test_store_failures_are_500_without_details() {
    let db = setup_db().await;
    let requests = [
        post_json("/users", json!({ "name": "Alice" })),
        get("/users/1"),
        get("/users"),
        post_json("/users/batch", json!({ "user_ids": [1] })),
    ];

    for request in requests {
        let (status, body) = send(failing_app(&db), request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["result"], false);
        assert_eq!(body["error"]["code"], "DATABASE_ERROR");
        assert!(!body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("connection refused"));
    }
}

// =============================================================================
// Health & docs
// =============================================================================

#[tokio::test]
async fn test_health_check_reports_healthy() {
    let db = setup_db().await;

    let (status, body) = send(app(&db), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_lists_user_paths() {
    let db = setup_db().await;

    let (status, body) = send(app(&db), get("/api-docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/users"].is_object());
    assert!(body["paths"]["/users/batch"].is_object());
    assert!(body["paths"]["/users/{id}"].is_object());
}
