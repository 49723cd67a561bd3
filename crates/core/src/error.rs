//! Error types for the sentiment pipeline
//!
//! Only [`ValidationError`] is fatal to a request. Detection, translation and
//! scoring errors are returned by the collaborators and recovered by the
//! orchestrator, which substitutes a fallback value at each call site.

use thiserror::Error;

/// Input validation errors, reported to the caller before the pipeline runs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No text provided")]
    MissingText,

    #[error("No text provided")]
    EmptyText,
}

/// Language detection errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DetectionError {
    #[error("Language could not be determined")]
    Undetermined,

    #[error("Detected '{language}' with confidence {confidence:.2} below threshold")]
    LowConfidence { language: String, confidence: f64 },

    #[error("Detection timed out after {0}ms")]
    Timeout(u64),

    #[error("Detector backend error: {0}")]
    Backend(String),
}

/// Translation errors (either direction)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    #[error("Translation request failed: {0}")]
    Request(String),

    #[error("Translation service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode translation response: {0}")]
    Decode(String),

    #[error("Translation timed out after {0}ms")]
    Timeout(u64),

    #[error("Unsupported language pair: {from} -> {to}")]
    Unsupported { from: String, to: String },
}

/// Polarity scoring errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("Scoring model error: {0}")]
    Model(String),
}
