//! Request and result types for a single analysis
//!
//! Both are request-scoped: created at request entry and dropped once the
//! response has been serialized.

use serde::Serialize;
use std::fmt;

use crate::error::ValidationError;
use crate::language::{DisplayLanguage, LanguageCode};
use crate::sentiment::{Polarity, SentimentLabel};

/// Validated input to the pipeline. Text is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    text: String,
    display_language: DisplayLanguage,
}

impl AnalysisRequest {
    /// Create a request, rejecting empty text
    pub fn new(
        text: impl Into<String>,
        display_language: DisplayLanguage,
    ) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }
        Ok(Self {
            text,
            display_language,
        })
    }

    /// Build from optional wire fields; a missing display language means `en`
    pub fn from_parts(
        text: Option<String>,
        display_language: Option<String>,
    ) -> Result<Self, ValidationError> {
        let text = text.ok_or(ValidationError::MissingText)?;
        let display_language = display_language
            .map(DisplayLanguage::from)
            .unwrap_or_default();
        Self::new(text, display_language)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn display_language(&self) -> &DisplayLanguage {
        &self.display_language
    }
}

/// States of the analysis state machine, in transition order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Received,
    LanguageResolved,
    Normalized,
    Scored,
    Classified,
    Localized,
    Done,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::Received => "received",
            PipelineStage::LanguageResolved => "language_resolved",
            PipelineStage::Normalized => "normalized",
            PipelineStage::Scored => "scored",
            PipelineStage::Classified => "classified",
            PipelineStage::Localized => "localized",
            PipelineStage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Which output field a localization failure applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocalizedField {
    Sentiment,
    Text,
}

/// A collaborator failure that was recovered with a fallback value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Degradation {
    /// Language fell back to `unknown`
    DetectionFailed { reason: String },
    /// Normalized text is the untranslated input
    NormalizationFailed { reason: String },
    /// Polarity fell back to 0.0
    ScoringFailed { reason: String },
    /// Output field left in English
    LocalizationFailed { field: LocalizedField, reason: String },
}

impl Degradation {
    /// Short metric label
    pub fn kind(&self) -> &'static str {
        match self {
            Degradation::DetectionFailed { .. } => "detection",
            Degradation::NormalizationFailed { .. } => "normalization",
            Degradation::ScoringFailed { .. } => "scoring",
            Degradation::LocalizationFailed { .. } => "localization",
        }
    }
}

/// Structured result returned to the caller
///
/// Only the first four fields are serialized; the rest are diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// Label, or its translation into the display language
    pub sentiment: String,
    pub emoji: &'static str,
    /// Normalized text (possibly localized); absent when localization is disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_text: Option<String>,
    pub original_language: LanguageCode,

    #[serde(skip)]
    pub label: SentimentLabel,
    #[serde(skip)]
    pub polarity: Polarity,
    #[serde(skip)]
    pub normalized_text: String,
    #[serde(skip)]
    pub degradations: Vec<Degradation>,
    #[serde(skip)]
    pub stages: Vec<PipelineStage>,
}

impl AnalysisResult {
    pub fn is_degraded(&self) -> bool {
        !self.degradations.is_empty()
    }
}
