// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Lash analysis endpoint handler

use axum::{extract::State, Json};
use axum_extra::extract::multipart::{Multipart, MultipartRejection};
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::AnalysisResult;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::api::upload::read_upload_form;

/// POST /analyze - Classify the lashes in a photo and generate a report
///
/// # Request (multipart)
/// - `image`: photo file (required)
/// - `language`: `pl` or `en` - defaults to `pl`
///
/// # Response
/// - `status`: always "success"
/// - `type`: "natural" or "extensions"
/// - `result`: report text
///
/// # Errors
/// - 400 Bad Request: no image uploaded or malformed form
/// - 413 Payload Too Large: image exceeds the upload limit
/// - 500 Internal Server Error: report generation failed
pub async fn analyze_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let request_id = Uuid::new_v4();

    let form = read_upload_form(multipart, state.max_upload_bytes).await?;
    let (image, language) = form.require_image().map_err(|e| {
        warn!(%request_id, "Analysis request rejected: {}", e);
        e
    })?;

    info!(
        %request_id,
        "Analysis requested (language={}, image_bytes={}, mime={})",
        language,
        image.len(),
        image.mime_type()
    );

    let result = state
        .analyzer
        .analyze(&image, language)
        .await
        .map_err(|e| {
            warn!(%request_id, "Analysis failed: {}", e);
            ApiError::from(e)
        })?;

    info!(%request_id, "Analysis succeeded (type={})", result.lash_type);
    Ok(Json(result))
}
