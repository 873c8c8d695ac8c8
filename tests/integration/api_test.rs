//! API endpoint integration tests
//!
//! Tests for both domains: users and jobs, plus shared infrastructure
//! routes. All tests drive the composed router against a test database.

#![allow(dead_code)]

mod common;
mod jobs;
mod users;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use tower::ServiceExt;

use crate::common::TestApp;

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new().await.unwrap();
    let router = app.router();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = TestApp::new().await.unwrap();
    let router = app.router();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/candidacies")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
