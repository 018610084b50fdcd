// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Lash photo analysis
//!
//! This module provides:
//! - Lash classification (natural vs. extensions) with a structured-output prompt
//! - Report generation from a (language, lash type) template table
//! - The orchestrator that runs both in sequence

pub mod classifier;
pub mod orchestrator;
pub mod report;
pub mod types;

pub use classifier::Classifier;
pub use orchestrator::Analyzer;
pub use report::{report_template, ReportGenerator, ReportKind, ReportTemplate};
pub use types::{AnalysisResult, ImagePayload, LashType, Language};
