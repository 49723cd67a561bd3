//! Translation adapters
//!
//! Normalizes input to English before scoring and localizes the result for
//! display. Failures are returned to the caller, which decides the fallback.

mod http;
mod noop;

pub use http::{HttpTranslator, HttpTranslatorConfig};
pub use noop::NoopTranslator;

use mozhi_config::{TranslationConfig, TranslationProvider};
use mozhi_core::{TranslationError, Translator};
use std::sync::Arc;

/// Create translator based on config
pub fn create_translator(config: &TranslationConfig) -> Result<Arc<dyn Translator>, TranslationError> {
    match config.provider {
        TranslationProvider::Http => {
            let translator = HttpTranslator::new(HttpTranslatorConfig::from(config))?;
            Ok(Arc::new(translator))
        }
        TranslationProvider::Disabled => {
            tracing::info!("Translation disabled, using pass-through translator");
            Ok(Arc::new(NoopTranslator::new()))
        }
    }
}
