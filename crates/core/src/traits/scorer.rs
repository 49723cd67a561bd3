//! Polarity scorer trait

use crate::error::ScoringError;
use crate::sentiment::Polarity;

/// Continuous sentiment polarity for English text
///
/// Must be deterministic: the same text always yields the same score, in
/// [-1.0, 1.0]. Empty text scores 0.0.
pub trait PolarityScorer: Send + Sync {
    fn score(&self, text: &str) -> Result<Polarity, ScoringError>;

    fn name(&self) -> &str;
}
