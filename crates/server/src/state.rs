//! Application State
//!
//! Shared state across all handlers.

use std::sync::Arc;

use mozhi_config::Settings;
use mozhi_pipeline::{PipelineError, SentimentPipeline};

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Configuration
    pub config: Arc<Settings>,
    /// Sentiment pipeline, shared by all requests
    pub pipeline: Arc<SentimentPipeline>,
}

impl AppState {
    pub fn new(config: Settings, pipeline: SentimentPipeline) -> Self {
        Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
        }
    }

    /// Build the pipeline and its collaborators from settings
    pub fn from_settings(config: Settings) -> Result<Self, PipelineError> {
        let pipeline = SentimentPipeline::from_settings(&config)?;
        Ok(Self::new(config, pipeline))
    }
}
