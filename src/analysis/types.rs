// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Value types shared by the classifier, report generator and HTTP layer

use serde::{Deserialize, Serialize};
use std::fmt;

/// An uploaded eye photo, held in memory for the lifetime of one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    bytes: Vec<u8>,
    mime_type: String,
}

impl ImagePayload {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Report language. Anything other than English falls back to Polish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pl,
    En,
}

impl Language {
    /// Resolve an optional form value; absent or unknown values yield Polish
    pub fn from_field(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("en") => Language::En,
            _ => Language::Pl,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Pl => "pl",
            Language::En => "en",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Language::Pl => 0,
            Language::En => 1,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the photographed lashes are the client's own or bonded extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LashType {
    Natural,
    /// Also the answer given whenever classification cannot be trusted
    #[default]
    Extensions,
}

impl LashType {
    pub const ALL: [LashType; 2] = [LashType::Natural, LashType::Extensions];

    pub fn as_str(&self) -> &'static str {
        match self {
            LashType::Natural => "natural",
            LashType::Extensions => "extensions",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            LashType::Natural => 0,
            LashType::Extensions => 1,
        }
    }
}

impl fmt::Display for LashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Envelope returned by a completed analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub status: String,
    #[serde(rename = "type")]
    pub lash_type: LashType,
    pub result: String,
}

impl AnalysisResult {
    pub fn success(lash_type: LashType, result: String) -> Self {
        Self {
            status: "success".to_string(),
            lash_type,
            result,
        }
    }
}
