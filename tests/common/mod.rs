#![allow(dead_code)]

use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::{SystemTime, UNIX_EPOCH},
};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, header::CONTENT_TYPE},
    response::Response,
};
use moviedb::AppState;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

static NEXT_DB: AtomicU64 = AtomicU64::new(0);

/// Opens a freshly migrated SQLite file under the system temp dir.
pub async fn test_db() -> DatabaseConnection {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut path = std::env::temp_dir();
    path.push(format!(
        "moviedb-test-{}-{}-{}.sqlite",
        std::process::id(),
        nanos,
        NEXT_DB.fetch_add(1, Ordering::Relaxed)
    ));

    let database_url = format!("sqlite://{}?mode=rwc", path.display());
    moviedb::db::connect_and_migrate(&database_url, 1).await.expect("failed to open test database")
}

/// The production router over an empty database.
pub async fn test_app() -> Router {
    moviedb::app(Arc::new(AppState::new(test_db().await)))
}

pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<Body>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }
    let request = builder.body(body.into()).expect("failed to build request");
    app.clone().oneshot(request).await.expect("request failed")
}

pub async fn get(app: &Router, uri: &str) -> Response {
    send_raw(app, "GET", uri, None, Body::empty()).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    send_raw(app, "DELETE", uri, None, Body::empty()).await
}

pub async fn post_json(app: &Router, uri: &str, json: Value) -> Response {
    send_raw(app, "POST", uri, Some("application/json"), json.to_string()).await
}

pub async fn put_json(app: &Router, uri: &str, json: Value) -> Response {
    send_raw(app, "PUT", uri, Some("application/json"), json.to_string()).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body")
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("response body was not JSON")
}

/// Ids currently listed under `collection`, or empty when it answers 404.
pub async fn list_ids(app: &Router, collection: &str) -> Vec<i64> {
    let response = get(app, collection).await;
    if response.status() == axum::http::StatusCode::NOT_FOUND {
        return Vec::new();
    }
    let json = body_json(response).await;
    let mut ids: Vec<i64> = json
        .as_array()
        .expect("collection body is an array")
        .iter()
        .map(|item| item["id"].as_i64().expect("id is an integer"))
        .collect();
    ids.sort_unstable();
    ids
}

/// POSTs `json` and returns the id the store assigned to it.
pub async fn create(app: &Router, collection: &str, json: Value) -> i64 {
    let before = list_ids(app, collection).await;
    let response = post_json(app, collection, json).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);

    list_ids(app, collection)
        .await
        .into_iter()
        .find(|id| !before.contains(id))
        .expect("created row is listed")
}
