// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Tests for POST /generate-map
//!
//! The endpoint validates the upload and returns a language-selected
//! placeholder map without calling the model gateway.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};

use super::common::{
    app_with, image_part, json_body, multipart_request, send, text_part, StubGateway,
    PNG_BYTES,
};
use lash_analyzer::vision::MAX_IMAGE_SIZE;

fn unused_gateway() -> std::sync::Arc<StubGateway> {
    StubGateway::new(Ok(r#"{"type":"natural"}"#), Ok("unused"))
}

#[tokio::test]
async fn test_missing_image_returns_400() {
    let gateway = unused_gateway();
    let app = app_with(gateway.clone(), MAX_IMAGE_SIZE);

    let request = multipart_request("/generate-map", &[text_part("language", "en")]);
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body.get("error").is_some(), "body should carry an error field");
    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn test_language_defaults_to_polish() {
    let app = app_with(unused_gateway(), MAX_IMAGE_SIZE);

    let request = multipart_request("/generate-map", &[image_part(PNG_BYTES)]);
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let map = body["map"].as_str().unwrap();
    assert!(map.contains("Przykładowa mapa rzęs"));
    assert!(!map.contains("Sample lash map"));
}

#[tokio::test]
async fn test_english_language_returns_english_map() {
    let gateway = unused_gateway();
    let app = app_with(gateway.clone(), MAX_IMAGE_SIZE);

    let request = multipart_request(
        "/generate-map",
        &[image_part(PNG_BYTES), text_part("language", "en")],
    );
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body["map"].as_str().unwrap().contains("Sample lash map"));
    assert_eq!(gateway.call_count(), 0, "map endpoint must not call the model");
}

#[tokio::test]
async fn test_unknown_language_falls_back_to_polish() {
    let app = app_with(unused_gateway(), MAX_IMAGE_SIZE);

    let request = multipart_request(
        "/generate-map",
        &[text_part("language", "fr"), image_part(PNG_BYTES)],
    );
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body["map"].as_str().unwrap().contains("Przykładowa mapa rzęs"));
}

#[tokio::test]
async fn test_oversized_image_rejected() {
    let app = app_with(unused_gateway(), 4);

    let request = multipart_request("/generate-map", &[image_part(PNG_BYTES)]);
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("too large"));
}

#[tokio::test]
async fn test_non_multipart_body_rejected() {
    let app = app_with(unused_gateway(), MAX_IMAGE_SIZE);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/generate-map")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"language":"en"}"#))
        .unwrap();
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn test_generate_map_rejects_get() {
    let app = app_with(unused_gateway(), MAX_IMAGE_SIZE);

    let request = Request::builder()
        .method(Method::GET)
        .uri("/generate-map")
        .body(Body::empty())
        .unwrap();
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
