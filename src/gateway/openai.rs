// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Model gateway client for OpenAI-compatible chat completion APIs

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::{GatewayError, GatewayRequest, JsonSchema, ModelGateway};
use crate::analysis::ImagePayload;

// --- OpenAI-compatible serde structs ---

#[derive(serde::Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<serde_json::Value>,
}

#[derive(serde::Serialize)]
struct ChatMessage {
    role: String,
    content: serde_json::Value,
}

#[derive(serde::Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[derive(serde::Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(serde::Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(serde::Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// Client for a hosted vision model behind an OpenAI-compatible API
pub struct OpenAiGateway {
    client: Client,
    endpoint: String,
    api_key: String,
    model_name: String,
}

impl OpenAiGateway {
    /// Create a new gateway client
    pub fn new(
        endpoint: &str,
        api_key: &str,
        model_name: &str,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = Client::builder().timeout(timeout).build()?;

        let endpoint = endpoint.trim_end_matches('/').to_string();
        info!(
            "Model gateway configured: endpoint={}, model={}, timeout={:?}",
            endpoint, model_name, timeout
        );

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.to_string(),
            model_name: model_name.to_string(),
        })
    }

    fn build_request(&self, request: &GatewayRequest) -> ChatRequest {
        ChatRequest {
            model: self.model_name.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: serde_json::Value::String(request.system_prompt.clone()),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: serde_json::json!([
                        {"type": "text", "text": request.user_prompt},
                        {"type": "image_url", "image_url": {"url": data_url(&request.image)}}
                    ]),
                },
            ],
            response_format: request.response_schema.as_ref().map(response_format),
        }
    }
}

/// Embed an image as a base64 `data:` URL
pub fn data_url(image: &ImagePayload) -> String {
    format!(
        "data:{};base64,{}",
        image.mime_type(),
        STANDARD.encode(image.bytes())
    )
}

fn response_format(schema: &JsonSchema) -> serde_json::Value {
    serde_json::json!({
        "type": "json_schema",
        "json_schema": {
            "name": schema.name,
            "strict": true,
            "schema": schema.schema,
        }
    })
}

#[async_trait]
impl ModelGateway for OpenAiGateway {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    async fn complete(&self, request: GatewayRequest) -> Result<String, GatewayError> {
        let start = Instant::now();
        let body = self.build_request(&request);

        debug!(
            "Sending completion: model={}, image_bytes={}, structured={}",
            self.model_name,
            request.image.len(),
            request.response_schema.is_some()
        );

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.endpoint))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let chat_response: ChatResponse = response.json().await?;
        if let Some(usage) = &chat_response.usage {
            debug!(
                "Completion usage: prompt={}, completion={}, total={}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        let text = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(GatewayError::EmptyResponse)?;

        info!(
            "Completion finished: {} chars, {}ms (model: {})",
            text.len(),
            start.elapsed().as_millis(),
            self.model_name
        );

        Ok(text)
    }
}
