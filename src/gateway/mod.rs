// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Model gateway abstraction
//!
//! A gateway is a hosted vision-language model that takes one image, a
//! system instruction and a user instruction, and returns text. When a
//! response schema is supplied the gateway must ask the model for output
//! conforming to it.

pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

use crate::analysis::ImagePayload;

pub use openai::OpenAiGateway;

/// Errors raised while talking to the model gateway
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("gateway request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("gateway returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("gateway response contained no message content")]
    EmptyResponse,

    #[error("gateway error: {0}")]
    Other(String),
}

/// Named JSON schema used to constrain model output
#[derive(Debug, Clone, PartialEq)]
pub struct JsonSchema {
    pub name: String,
    pub schema: serde_json::Value,
}

/// A single image + prompt request to the model
#[derive(Debug, Clone)]
pub struct GatewayRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub image: ImagePayload,
    pub response_schema: Option<JsonSchema>,
}

#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Model identifier sent with every request
    fn model_name(&self) -> &str;

    /// Run one completion and return the raw response text
    async fn complete(&self, request: GatewayRequest) -> Result<String, GatewayError>;
}
