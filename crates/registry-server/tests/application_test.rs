//! Tests for application wiring across both storage backends.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use registry_config::{AppConfig, StorageBackend};
use registry_server::Application;
use serde_json::{json, Value};
use std::path::Path;
use tower::ServiceExt;

fn memory_config(seed: bool) -> AppConfig {
    let mut config = AppConfig::default();
    config.storage.backend = StorageBackend::Memory;
    config.storage.seed_sample_data = seed;
    config
}

fn sqlite_config(path: &Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.storage.backend = StorageBackend::Sqlite;
    config.database.url = format!("sqlite://{}?mode=rwc", path.display());
    config
}

async fn call(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_memory_backend_seeds_sample_users() {
    let app = Application::build(memory_config(true)).await.unwrap();
    let router = app.router();

    let (status, users) = call(&router, Method::GET, "/api/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(users.as_array().unwrap().len(), 3);

    let (status, user) = call(&router, Method::GET, "/api/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["username"], "user1");
}

#[tokio::test]
async fn test_memory_backend_is_ready_and_serves_crud() {
    let app = Application::build(memory_config(true)).await.unwrap();
    let router = app.router();

    let (status, body) = call(&router, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");

    let (status, created) = call(
        &router,
        Method::POST,
        "/api/users",
        Some(json!({"username": "user4", "email": "user4@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 4);

    let (status, _) = call(&router, Method::DELETE, "/api/users/4", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, users) = call(&router, Method::GET, "/api/users", None).await;
    assert_eq!(users.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_memory_backend_without_seed_starts_empty() {
    let app = Application::build(memory_config(false)).await.unwrap();

    let (_, users) = call(&app.router(), Method::GET, "/api/users", None).await;
    assert!(users.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_sqlite_backend_full_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let app = Application::build(sqlite_config(&dir.path().join("users.db")))
        .await
        .unwrap();
    let router = app.router();

    let (status, created) = call(
        &router,
        Method::POST,
        "/api/users",
        Some(json!({"username": "user4", "email": "user4@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 4);

    let (status, _) = call(
        &router,
        Method::PUT,
        "/api/users/1",
        Some(json!({"username": "user1_updated", "email": "user1@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, user) = call(&router, Method::GET, "/api/users/1", None).await;
    assert_eq!(user["username"], "user1_updated");

    let (status, _) = call(&router, Method::DELETE, "/api/users/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = call(&router, Method::GET, "/api/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(&router, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_sqlite_backend_persists_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.db");

    {
        let app = Application::build(sqlite_config(&path)).await.unwrap();
        let (status, _) = call(
            &app.router(),
            Method::POST,
            "/api/users",
            Some(json!({"username": "durable", "email": "durable@example.com"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let app = Application::build(sqlite_config(&path)).await.unwrap();
    let (_, users) = call(&app.router(), Method::GET, "/api/users", None).await;
    let users = users.as_array().unwrap();

    assert_eq!(users.len(), 4);
    assert_eq!(users[3]["username"], "durable");
}
