// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::gateway::GatewayError;
use crate::vision::ImageError;

/// JSON error body: `{"error": ..., "details": ...}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone)]
pub enum ApiError {
    /// A required multipart field was not sent
    MissingField { field: String, message: String },
    InvalidRequest(String),
    PayloadTooLarge(String),
    /// The model gateway failed while producing the analysis
    AnalysisFailed(String),
    InternalError(String),
}

impl ApiError {
    pub fn to_response(&self) -> ErrorResponse {
        let (error, details) = match self {
            ApiError::MissingField { message, .. } => (message.clone(), None),
            ApiError::InvalidRequest(msg) => (msg.clone(), None),
            ApiError::PayloadTooLarge(msg) => (msg.clone(), None),
            ApiError::AnalysisFailed(details) => {
                ("Analysis failed".to_string(), Some(details.clone()))
            }
            ApiError::InternalError(details) => {
                ("Internal server error".to_string(), Some(details.clone()))
            }
        };

        ErrorResponse { error, details }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::MissingField { .. } | ApiError::InvalidRequest(_) => 400,
            ApiError::PayloadTooLarge(_) => 413,
            ApiError::AnalysisFailed(_) | ApiError::InternalError(_) => 500,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingField { field, message } => {
                write!(f, "Missing field {}: {}", field, message)
            }
            ApiError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ApiError::PayloadTooLarge(msg) => write!(f, "Payload too large: {}", msg),
            ApiError::AnalysisFailed(msg) => write!(f, "Analysis failed: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ImageError> for ApiError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::TooLarge(..) => ApiError::PayloadTooLarge(err.to_string()),
            ImageError::EmptyData => ApiError::MissingField {
                field: "image".to_string(),
                message: "Image file is empty".to_string(),
            },
        }
    }
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        ApiError::AnalysisFailed(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_response())).into_response()
    }
}
