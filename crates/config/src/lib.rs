//! Configuration management for the sentiment service
//!
//! Settings are layered from `config/default.yaml`, an optional environment
//! overlay, and `MOZHI__*` environment variables. Lexicons are loaded
//! separately so they can be versioned and replaced without a redeploy.

pub mod constants;
pub mod lexicon;
pub mod settings;

pub use lexicon::LexiconSet;
pub use settings::{
    load_settings, DetectionConfig, LexiconConfig, ObservabilityConfig, PipelineConfig,
    ServerConfig, Settings, TranslationConfig, TranslationProvider,
};

use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File not found: {path}")]
    FileNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
