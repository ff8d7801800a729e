//! Helpers for driving the router in tests.

use crate::{router, AppState};
use axum::{
    body::{Body, Bytes},
    http::{header, Method, Request, StatusCode},
    Router,
};
use clinicals_core::Database;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Router backed by a fresh in-memory database.
pub(crate) async fn test_app() -> Router {
    let db = Database::connect_in_memory()
        .await
        .expect("in-memory database should open");
    router(AppState::new(&db))
}

/// Send one request and collect the status and body.
pub(crate) async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Bytes) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes)
}
