// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image intake for uploaded eye photos

pub mod image_utils;

pub use image_utils::{
    detect_format, load_image_bytes, resolve_mime_type, ImageError, MAX_IMAGE_SIZE,
};
