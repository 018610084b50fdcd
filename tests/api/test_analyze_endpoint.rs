// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Tests for POST /analyze
//!
//! The gateway is stubbed, so these tests check the classify-then-report
//! sequence and the HTTP envelope rather than model output.

use axum::http::StatusCode;
use lash_analyzer::analysis::{report_template, LashType, Language};
use lash_analyzer::vision::MAX_IMAGE_SIZE;

use super::common::{
    app_with, image_part, json_body, multipart_request, send, text_part, StubGateway,
    PNG_BYTES,
};

#[tokio::test]
async fn test_analyze_natural_english() {
    let gateway = StubGateway::new(Ok(r#"{"type":"natural"}"#), Ok("  Lovely density.\n"));
    let app = app_with(gateway.clone(), MAX_IMAGE_SIZE);

    let request = multipart_request(
        "/analyze",
        &[image_part(PNG_BYTES), text_part("language", "en")],
    );
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["type"], "natural");
    assert_eq!(body["result"], "Lovely density.");

    let requests = gateway.requests.lock().unwrap();
    assert_eq!(requests.len(), 2, "one classification and one report call");
    assert_eq!(
        requests[1].system_prompt,
        report_template((Language::En, LashType::Natural)).system_prompt
    );
    assert_eq!(requests[1].image.mime_type(), "image/png");
    assert_eq!(requests[1].image.bytes(), PNG_BYTES);
}

#[tokio::test]
async fn test_invalid_classification_reports_extensions() {
    let gateway = StubGateway::new(Ok("{not json"), Ok("Styling report"));
    let app = app_with(gateway.clone(), MAX_IMAGE_SIZE);

    let request = multipart_request("/analyze", &[image_part(PNG_BYTES)]);
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["type"], "extensions");

    let requests = gateway.requests.lock().unwrap();
    assert_eq!(
        requests[1].system_prompt,
        report_template((Language::Pl, LashType::Extensions)).system_prompt
    );
}

#[tokio::test]
async fn test_classification_outage_still_succeeds() {
    let gateway = StubGateway::new(Err("connection refused"), Ok("Raport"));
    let app = app_with(gateway.clone(), MAX_IMAGE_SIZE);

    let request = multipart_request("/analyze", &[image_part(PNG_BYTES)]);
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["type"], "extensions");
    assert_eq!(body["result"], "Raport");
}

#[tokio::test]
async fn test_report_failure_returns_500() {
    let gateway = StubGateway::new(Ok(r#"{"type":"natural"}"#), Err("rate limited"));
    let app = app_with(gateway.clone(), MAX_IMAGE_SIZE);

    let request = multipart_request("/analyze", &[image_part(PNG_BYTES)]);
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Analysis failed");
    assert!(body["details"].as_str().unwrap().contains("rate limited"));
    assert_eq!(gateway.call_count(), 2, "no retries after a report failure");
}

#[tokio::test]
async fn test_missing_image_returns_400() {
    let gateway = StubGateway::new(Ok(r#"{"type":"natural"}"#), Ok("unused"));
    let app = app_with(gateway.clone(), MAX_IMAGE_SIZE);

    let request = multipart_request("/analyze", &[text_part("language", "pl")]);
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body.get("error").is_some());
    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn test_empty_image_returns_400() {
    let gateway = StubGateway::new(Ok(r#"{"type":"natural"}"#), Ok("unused"));
    let app = app_with(gateway.clone(), MAX_IMAGE_SIZE);

    let request = multipart_request("/analyze", &[image_part(&[])]);
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(gateway.call_count(), 0);
}
