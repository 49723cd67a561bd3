//! Core traits and types for the sentiment pipeline
//!
//! This crate provides foundational types used across all other crates:
//! - Language codes and display-language preferences
//! - Sentiment labels, emoji glyphs and polarity scores
//! - Request/result types
//! - Error taxonomy
//! - Collaborator traits (detector, translator, scorer)

pub mod analysis;
pub mod error;
pub mod language;
pub mod sentiment;
pub mod traits;

pub use analysis::{AnalysisRequest, AnalysisResult, Degradation, LocalizedField, PipelineStage};
pub use error::{DetectionError, ScoringError, TranslationError, ValidationError};
pub use language::{DisplayLanguage, LanguageCode};
pub use sentiment::{Classification, Polarity, SentimentLabel};
pub use traits::{LanguageDetector, PolarityScorer, Translator};
