// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod analysis;
pub mod api;
pub mod config;
pub mod gateway;
pub mod version;
pub mod vision;

pub use analysis::{
    AnalysisResult, Analyzer, Classifier, ImagePayload, LashType, Language, ReportGenerator,
};
pub use config::AppConfig;
pub use gateway::{GatewayError, GatewayRequest, ModelGateway, OpenAiGateway};
