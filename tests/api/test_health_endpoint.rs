// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use lash_analyzer::vision::MAX_IMAGE_SIZE;

use super::common::{app_with, json_body, send, StubGateway};

#[tokio::test]
async fn test_health_reports_model() {
    let gateway = StubGateway::new(Ok(r#"{"type":"natural"}"#), Ok("unused"));
    let app = app_with(gateway.clone(), MAX_IMAGE_SIZE);

    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["model"], "stub-vlm");
    assert_eq!(body["version"], lash_analyzer::version::VERSION);
    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let gateway = StubGateway::new(Ok(r#"{"type":"natural"}"#), Ok("unused"));
    let app = app_with(gateway, MAX_IMAGE_SIZE);

    let request = Request::builder()
        .method(Method::GET)
        .uri("/v1/models")
        .body(Body::empty())
        .unwrap();
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
