// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Multipart photo upload parsing shared by the analysis and map endpoints

use axum::http::StatusCode;
use axum_extra::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use tracing::debug;

use super::errors::ApiError;
use crate::analysis::{ImagePayload, Language};
use crate::vision::load_image_bytes;

pub const IMAGE_FIELD: &str = "image";
pub const LANGUAGE_FIELD: &str = "language";

/// Parsed `image` + `language` form
#[derive(Debug)]
pub struct UploadForm {
    pub image: Option<ImagePayload>,
    pub language: Language,
}

impl UploadForm {
    /// The uploaded image, or a 400 if the field was absent
    pub fn require_image(self) -> Result<(ImagePayload, Language), ApiError> {
        match self.image {
            Some(image) => Ok((image, self.language)),
            None => Err(ApiError::MissingField {
                field: IMAGE_FIELD.to_string(),
                message: "No image file uploaded".to_string(),
            }),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        let status = err.status();
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(err.body_text())
        } else if status.is_client_error() {
            ApiError::InvalidRequest(err.body_text())
        } else {
            ApiError::InternalError(err.body_text())
        }
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(err: MultipartRejection) -> Self {
        ApiError::InvalidRequest(err.to_string())
    }
}

/// Read the upload form. Unknown fields are skipped; a missing `language`
/// resolves to Polish.
pub async fn read_upload_form(
    multipart: Result<Multipart, MultipartRejection>,
    max_upload_bytes: usize,
) -> Result<UploadForm, ApiError> {
    let mut multipart = multipart?;
    let mut image = None;
    let mut language = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(IMAGE_FIELD) => {
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                debug!(
                    "Received image upload: {} bytes, content_type={:?}",
                    bytes.len(),
                    content_type
                );
                image = Some(load_image_bytes(
                    bytes.to_vec(),
                    content_type.as_deref(),
                    max_upload_bytes,
                )?);
            }
            Some(LANGUAGE_FIELD) => {
                language = Some(field.text().await?);
            }
            other => {
                debug!("Ignoring unexpected form field {:?}", other);
            }
        }
    }

    Ok(UploadForm {
        image,
        language: Language::from_field(language.as_deref()),
    })
}
