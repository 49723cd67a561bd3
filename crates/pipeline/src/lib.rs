//! Sentiment Pipeline
//!
//! Sequences the collaborators for one request:
//! dialect heuristic + language detection -> normalization to English ->
//! polarity scoring -> keyword classification -> optional localization.
//!
//! # Example
//!
//! ```ignore
//! use mozhi_pipeline::SentimentPipeline;
//! use mozhi_core::{AnalysisRequest, DisplayLanguage};
//!
//! let pipeline = SentimentPipeline::builder()
//!     .translator(translator)
//!     .build();
//!
//! let request = AnalysisRequest::new("semma vettri", DisplayLanguage::Disabled)?;
//! let result = pipeline.analyze(&request).await;
//! println!("{} {}", result.sentiment, result.emoji);
//! ```

pub mod orchestrator;

pub use orchestrator::{OrchestratorConfig, SentimentPipeline, SentimentPipelineBuilder};

use thiserror::Error;

/// Pipeline construction errors
///
/// Analysis itself never fails once a pipeline exists.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] mozhi_config::ConfigError),

    #[error("Translator initialization failed: {0}")]
    Translator(#[from] mozhi_core::TranslationError),
}
