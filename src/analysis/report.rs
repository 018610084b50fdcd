// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Styling report generation
//!
//! The system prompt is chosen from a fixed 2x2 table keyed by
//! `(Language, LashType)`: natural lashes get a pre-application report,
//! extensions get a styling report. Both variants use the same four
//! sections (strengths, areas for improvement, technical recommendations,
//! quality and safety).

use std::sync::Arc;
use tracing::debug;

use super::types::{ImagePayload, LashType, Language};
use crate::gateway::{GatewayError, GatewayRequest, ModelGateway};

/// Which flavour of report a template produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    PreApplication,
    Styling,
}

#[derive(Debug)]
pub struct ReportTemplate {
    pub language: Language,
    pub lash_type: LashType,
    pub kind: ReportKind,
    pub system_prompt: &'static str,
}

const PL_NATURAL: &str = "Jesteś doświadczoną stylistką rzęs. Na podstawie zdjęcia naturalnych rzęs klientki przygotuj raport przed aplikacją przedłużania rzęs.\n\
Oceń gęstość, długość, grubość i skręt naturalnych rzęs, ich kondycję oraz kształt oka.\n\
Raport podziel dokładnie na cztery sekcje z nagłówkami:\n\
1. Mocne strony\n\
2. Obszary do poprawy\n\
3. Rekomendacje techniczne (proponowana metoda, długości, skręty, grubość i mapowanie)\n\
4. Jakość i bezpieczeństwo (przeciwwskazania, obciążenie naturalnych rzęs, pielęgnacja)\n\
Pisz po polsku, rzeczowo i profesjonalnie, bez wstępów i podsumowań poza sekcjami.";

const PL_EXTENSIONS: &str = "Jesteś doświadczoną stylistką rzęs i instruktorką. Na podstawie zdjęcia wykonanej stylizacji przedłużanych rzęs przygotuj raport ze stylizacji.\n\
Oceń dobór długości i skrętów, mapowanie, gęstość, kierunkowość, separację, klejenie oraz dopasowanie efektu do kształtu oka.\n\
Raport podziel dokładnie na cztery sekcje z nagłówkami:\n\
1. Mocne strony\n\
2. Obszary do poprawy\n\
3. Rekomendacje techniczne (konkretne zmiany długości, skrętów, grubości i mapowania)\n\
4. Jakość i bezpieczeństwo (sklejenia, odległość od powieki, obciążenie naturalnych rzęs)\n\
Pisz po polsku, rzeczowo i profesjonalnie, bez wstępów i podsumowań poza sekcjami.";

const EN_NATURAL: &str = "You are an experienced lash stylist. Based on the photo of the client's natural lashes, prepare a pre-application report for a lash extension service.\n\
Assess the density, length, thickness and curl of the natural lashes, their condition and the eye shape.\n\
Structure the report into exactly four sections with headings:\n\
1. Strengths\n\
2. Areas for improvement\n\
3. Technical recommendations (suggested technique, lengths, curls, thickness and mapping)\n\
4. Quality & safety (contraindications, load on the natural lashes, aftercare)\n\
Write in English, concisely and professionally, with no introduction or summary outside the sections.";

const EN_EXTENSIONS: &str = "You are an experienced lash stylist and trainer. Based on the photo of a finished lash extension set, prepare a styling report.\n\
Assess the choice of lengths and curls, mapping, density, direction, isolation, attachment and how well the effect suits the eye shape.\n\
Structure the report into exactly four sections with headings:\n\
1. Strengths\n\
2. Areas for improvement\n\
3. Technical recommendations (concrete changes to lengths, curls, thickness and mapping)\n\
4. Quality & safety (stickies, distance from the eyelid, load on the natural lashes)\n\
Write in English, concisely and professionally, with no introduction or summary outside the sections.";

/// Indexed as `REPORT_TEMPLATES[language][lash_type]`
static REPORT_TEMPLATES: [[ReportTemplate; 2]; 2] = [
    [
        ReportTemplate {
            language: Language::Pl,
            lash_type: LashType::Natural,
            kind: ReportKind::PreApplication,
            system_prompt: PL_NATURAL,
        },
        ReportTemplate {
            language: Language::Pl,
            lash_type: LashType::Extensions,
            kind: ReportKind::Styling,
            system_prompt: PL_EXTENSIONS,
        },
    ],
    [
        ReportTemplate {
            language: Language::En,
            lash_type: LashType::Natural,
            kind: ReportKind::PreApplication,
            system_prompt: EN_NATURAL,
        },
        ReportTemplate {
            language: Language::En,
            lash_type: LashType::Extensions,
            kind: ReportKind::Styling,
            system_prompt: EN_EXTENSIONS,
        },
    ],
];

pub fn report_template(key: (Language, LashType)) -> &'static ReportTemplate {
    let (language, lash_type) = key;
    &REPORT_TEMPLATES[language.index()][lash_type.index()]
}

pub fn report_user_prompt(language: Language) -> &'static str {
    match language {
        Language::Pl => "Przygotuj pełny raport.",
        Language::En => "Prepare the full report.",
    }
}

pub struct ReportGenerator {
    gateway: Arc<dyn ModelGateway>,
}

impl ReportGenerator {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }

    /// Generate the report text for an already classified photo.
    ///
    /// Gateway failures are returned to the caller unchanged.
    pub async fn generate(
        &self,
        image: &ImagePayload,
        language: Language,
        lash_type: LashType,
    ) -> Result<String, GatewayError> {
        let template = report_template((language, lash_type));
        debug!(
            "Generating {:?} report (language={}, type={})",
            template.kind, language, lash_type
        );

        let request = GatewayRequest {
            system_prompt: template.system_prompt.to_string(),
            user_prompt: report_user_prompt(language).to_string(),
            image: image.clone(),
            response_schema: None,
        };

        let text = self.gateway.complete(request).await?;
        Ok(text.trim().to_string())
    }
}
