// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Classify-then-report workflow

use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use super::classifier::Classifier;
use super::report::ReportGenerator;
use super::types::{AnalysisResult, ImagePayload, Language};
use crate::gateway::{GatewayError, ModelGateway};

pub struct Analyzer {
    classifier: Classifier,
    reporter: ReportGenerator,
}

impl Analyzer {
    pub fn new(classifier: Classifier, reporter: ReportGenerator) -> Self {
        Self {
            classifier,
            reporter,
        }
    }

    /// Build an analyzer whose classifier and report generator share one gateway
    pub fn with_gateway(gateway: Arc<dyn ModelGateway>) -> Self {
        Self::new(
            Classifier::new(gateway.clone()),
            ReportGenerator::new(gateway),
        )
    }

    /// Classify the photo, then generate the matching report.
    ///
    /// The two gateway calls run strictly in sequence because the report
    /// prompt depends on the classification.
    pub async fn analyze(
        &self,
        image: &ImagePayload,
        language: Language,
    ) -> Result<AnalysisResult, GatewayError> {
        let start = Instant::now();

        let lash_type = self.classifier.classify(image).await;
        let report = self.reporter.generate(image, language, lash_type).await?;

        info!(
            "Analysis complete: type={}, language={}, {} chars, {}ms",
            lash_type,
            language,
            report.len(),
            start.elapsed().as_millis()
        );

        Ok(AnalysisResult::success(lash_type, report))
    }
}
