// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Validation and MIME resolution for uploaded photos
//!
//! Pixels are never decoded here; the bytes are forwarded to the model
//! gateway as-is.

use image::ImageFormat;
use thiserror::Error;

use crate::analysis::ImagePayload;

/// Maximum upload size (8MB)
pub const MAX_IMAGE_SIZE: usize = 8 * 1024 * 1024;

/// MIME type used when neither the upload nor the magic bytes identify the format
pub const FALLBACK_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Image data is too large: {0} bytes (max: {1} bytes)")]
    TooLarge(usize, usize),

    #[error("Image data is empty")]
    EmptyData,
}

/// Detect the image format from magic bytes
pub fn detect_format(bytes: &[u8]) -> Option<ImageFormat> {
    image::guess_format(bytes).ok()
}

/// Pick the MIME type for an upload. A declared `image/*` content type wins,
/// then the sniffed format, then [`FALLBACK_MIME_TYPE`].
pub fn resolve_mime_type(bytes: &[u8], declared: Option<&str>) -> String {
    if let Some(declared) = declared.map(str::trim) {
        if declared.to_ascii_lowercase().starts_with("image/") {
            return declared.to_ascii_lowercase();
        }
    }

    detect_format(bytes)
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|| FALLBACK_MIME_TYPE.to_string())
}

/// Turn raw multipart bytes into an [`ImagePayload`]
///
/// # Arguments
/// * `bytes` - Raw image bytes
/// * `declared_mime` - Content type sent with the upload, if any
/// * `max_size` - Upper bound in bytes
pub fn load_image_bytes(
    bytes: Vec<u8>,
    declared_mime: Option<&str>,
    max_size: usize,
) -> Result<ImagePayload, ImageError> {
    if bytes.is_empty() {
        return Err(ImageError::EmptyData);
    }

    if bytes.len() > max_size {
        return Err(ImageError::TooLarge(bytes.len(), max_size));
    }

    let mime_type = resolve_mime_type(&bytes, declared_mime);
    Ok(ImagePayload::new(bytes, mime_type))
}
