// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Lash map endpoint handler

use axum::{extract::State, Json};
use axum_extra::extract::multipart::{Multipart, MultipartRejection};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use super::placeholder::placeholder_map;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::api::upload::read_upload_form;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateMapResponse {
    pub map: String,
}

/// POST /generate-map - Return a lash map for an uploaded eye photo
///
/// # Request (multipart)
/// - `image`: photo file (required)
/// - `language`: `pl` or `en` - defaults to `pl`
///
/// # Response
/// - `map`: placeholder map text in the requested language
///
/// # Errors
/// - 400 Bad Request: no image uploaded or malformed form
/// - 413 Payload Too Large: image exceeds the upload limit
pub async fn generate_map_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<GenerateMapResponse>, ApiError> {
    let request_id = Uuid::new_v4();

    let form = read_upload_form(multipart, state.max_upload_bytes)
        .await
        .map_err(|e| {
            warn!(%request_id, "Map request rejected: {}", e);
            e
        })?;
    let (image, language) = form.require_image().map_err(|e| {
        warn!(%request_id, "Map request rejected: {}", e);
        e
    })?;

    info!(
        %request_id,
        "Serving placeholder map (language={}, image_bytes={})",
        language,
        image.len()
    );

    Ok(Json(GenerateMapResponse {
        map: placeholder_map(language).to_string(),
    }))
}
