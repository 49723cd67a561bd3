//! No-op translator (pass-through)

use async_trait::async_trait;
use mozhi_core::{LanguageCode, TranslationError, Translator};

/// Pass-through translator used when translation is disabled
#[derive(Debug, Clone, Default)]
pub struct NoopTranslator;

impl NoopTranslator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Translator for NoopTranslator {
    async fn translate(
        &self,
        text: &str,
        _from: Option<&LanguageCode>,
        _to: &LanguageCode,
    ) -> Result<String, TranslationError> {
        Ok(text.to_string())
    }

    fn name(&self) -> &str {
        "noop"
    }
}
