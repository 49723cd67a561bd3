//! Translator trait
//!
//! One bidirectional client per process. `to_english` normalizes input for
//! scoring; `to_target` localizes output for display.

use async_trait::async_trait;

use crate::error::TranslationError;
use crate::language::LanguageCode;

#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into `to`. `from = None` asks the service to auto-detect.
    async fn translate(
        &self,
        text: &str,
        from: Option<&LanguageCode>,
        to: &LanguageCode,
    ) -> Result<String, TranslationError>;

    /// Normalize `text` from `source` into English.
    ///
    /// An `unknown` source is sent as auto-detect.
    async fn to_english(
        &self,
        text: &str,
        source: &LanguageCode,
    ) -> Result<String, TranslationError> {
        let from = (!source.is_unknown()).then_some(source);
        self.translate(text, from, &LanguageCode::english()).await
    }

    /// Localize `text` into `target`, auto-detecting the source.
    async fn to_target(
        &self,
        text: &str,
        target: &LanguageCode,
    ) -> Result<String, TranslationError> {
        self.translate(text, None, target).await
    }

    /// Translator name for logs
    fn name(&self) -> &str;
}
