//! Language detector trait

use async_trait::async_trait;

use crate::error::DetectionError;
use crate::language::LanguageCode;

/// Best-guess language identification
///
/// Implementations may cross a process or network boundary, so detection is
/// async. Failure is reported as an error; choosing the `unknown` fallback is
/// the caller's decision.
///
/// # Example
///
/// ```ignore
/// let lang = detector.detect("vanakkam, eppadi irukkeenga?").await
///     .unwrap_or_else(|_| LanguageCode::unknown());
/// ```
#[async_trait]
pub trait LanguageDetector: Send + Sync {
    /// Detect the language of `text`
    async fn detect(&self, text: &str) -> Result<LanguageCode, DetectionError>;

    /// Detector name for logs
    fn name(&self) -> &str;
}
