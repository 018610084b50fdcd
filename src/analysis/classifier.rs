// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Natural vs. extension lash classifier backed by the model gateway

use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

use super::types::{ImagePayload, LashType};
use crate::gateway::{GatewayRequest, JsonSchema, ModelGateway};

pub const CLASSIFY_SYSTEM_PROMPT: &str = "You are an expert lash stylist. Look at the photo of an eye and decide which category the lashes belong to:\n\
- \"natural\": the client's own lashes with no extensions applied (mascara or a lash lift still count as natural);\n\
- \"extensions\": artificial lashes bonded to the natural lashes (classic, volume, hybrid or mega volume sets).\n\n\
Respond with strict JSON matching the schema {\"type\": \"natural\" | \"extensions\"} and nothing else.";

pub const CLASSIFY_USER_PROMPT: &str = "Classify the lashes in this photo.";

/// Schema name sent with the structured-output constraint
pub const CLASSIFY_SCHEMA_NAME: &str = "lash_classification";

#[derive(Deserialize)]
struct Classification {
    #[serde(rename = "type")]
    lash_type: LashType,
}

/// Output schema: one required string field `type` limited to the two labels
pub fn classification_schema() -> JsonSchema {
    JsonSchema {
        name: CLASSIFY_SCHEMA_NAME.to_string(),
        schema: serde_json::json!({
            "type": "object",
            "properties": {
                "type": {
                    "type": "string",
                    "enum": [LashType::Natural.as_str(), LashType::Extensions.as_str()]
                }
            },
            "required": ["type"],
            "additionalProperties": false
        }),
    }
}

/// Parse model output. Anything that is not `{"type": <label>}` yields the default.
pub fn parse_classification(raw: &str) -> LashType {
    match serde_json::from_str::<Classification>(raw.trim()) {
        Ok(parsed) => parsed.lash_type,
        Err(e) => {
            warn!(
                "Unparseable classification {:?}: {}; defaulting to {}",
                raw,
                e,
                LashType::default()
            );
            LashType::default()
        }
    }
}

pub struct Classifier {
    gateway: Arc<dyn ModelGateway>,
}

impl Classifier {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }

    /// Classify the lashes in `image`. Never fails: gateway and parse errors
    /// resolve to [`LashType::Extensions`]. Exactly one gateway call is made.
    pub async fn classify(&self, image: &ImagePayload) -> LashType {
        let request = GatewayRequest {
            system_prompt: CLASSIFY_SYSTEM_PROMPT.to_string(),
            user_prompt: CLASSIFY_USER_PROMPT.to_string(),
            image: image.clone(),
            response_schema: Some(classification_schema()),
        };

        match self.gateway.complete(request).await {
            Ok(raw) => {
                let lash_type = parse_classification(&raw);
                debug!("Classified lashes as {}", lash_type);
                lash_type
            }
            Err(e) => {
                warn!(
                    "Classification call failed: {}; defaulting to {}",
                    e,
                    LashType::default()
                );
                LashType::default()
            }
        }
    }
}
