//! Lexical polarity scoring
//!
//! A bag-of-words model over English text. Each lexicon word carries a
//! polarity in [-1, 1]. An intensifier directly before a scored word scales
//! it, a negator in the two preceding tokens flips and damps it, and the
//! document score is the mean over scored words.
//!
//! # Example
//!
//! ```
//! use mozhi_core::PolarityScorer;
//! use mozhi_text_processing::LexicalPolarityScorer;
//!
//! let scorer = LexicalPolarityScorer::new();
//! assert!(scorer.score("what a great victory").unwrap() > 0.0);
//! assert!(scorer.score("this is not good").unwrap() < 0.0);
//! assert_eq!(scorer.score("").unwrap(), 0.0);
//! ```

use mozhi_core::{Polarity, PolarityScorer, ScoringError};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use unicode_segmentation::UnicodeSegmentation;

/// Multiplier applied to a word polarity after a negator
const NEGATION_FACTOR: f64 = -0.5;

/// How many preceding tokens a negator reaches
const NEGATION_WINDOW: usize = 2;

static WORD_POLARITY: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        // positive
        ("excellent", 1.0),
        ("perfect", 1.0),
        ("best", 1.0),
        ("awesome", 1.0),
        ("wonderful", 1.0),
        ("fantastic", 0.9),
        ("amazing", 0.9),
        ("brilliant", 0.9),
        ("superb", 0.9),
        ("delighted", 0.9),
        ("great", 0.8),
        ("happy", 0.8),
        ("beautiful", 0.85),
        ("love", 0.5),
        ("loved", 0.7),
        ("lovely", 0.5),
        ("good", 0.7),
        ("nice", 0.6),
        ("glad", 0.5),
        ("pleased", 0.5),
        ("cheerful", 0.5),
        ("excited", 0.4),
        ("joy", 0.8),
        ("fun", 0.3),
        ("enjoy", 0.4),
        ("enjoyed", 0.4),
        ("better", 0.5),
        ("success", 0.3),
        ("successful", 0.75),
        ("victory", 0.5),
        ("win", 0.8),
        ("won", 0.5),
        ("proud", 0.8),
        ("kind", 0.6),
        ("thanks", 0.2),
        ("grateful", 0.6),
        ("positive", 0.2),
        ("fine", 0.4),
        ("calm", 0.3),
        ("interesting", 0.5),
        ("easy", 0.4),
        ("right", 0.3),
        ("super", 0.3),
        ("cool", 0.35),
        // negative
        ("terrible", -1.0),
        ("horrible", -1.0),
        ("awful", -1.0),
        ("worst", -1.0),
        ("disgusting", -1.0),
        ("hate", -0.8),
        ("hated", -0.9),
        ("angry", -0.5),
        ("bad", -0.7),
        ("sad", -0.5),
        ("unhappy", -0.6),
        ("poor", -0.4),
        ("wrong", -0.5),
        ("worse", -0.4),
        ("pain", -0.6),
        ("painful", -0.7),
        ("hurt", -0.5),
        ("lonely", -0.5),
        ("tired", -0.4),
        ("boring", -1.0),
        ("upset", -0.5),
        ("scared", -0.6),
        ("afraid", -0.6),
        ("difficult", -0.5),
        ("hard", -0.3),
        ("sick", -0.7),
        ("ugly", -0.7),
        ("stupid", -0.8),
        ("useless", -0.5),
        ("fail", -0.5),
        ("failed", -0.5),
        ("failure", -0.3),
        ("lost", -0.4),
        ("loss", -0.4),
        ("broken", -0.4),
        ("cry", -0.4),
        ("crying", -0.4),
        ("disappointed", -0.75),
        ("depressed", -0.8),
        ("miserable", -1.0),
        ("dull", -0.3),
        ("gloomy", -0.6),
        ("worried", -0.4),
        ("difficulty", -0.3),
    ]
    .into_iter()
    .collect()
});

static INTENSIFIERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("very", 1.3),
        ("really", 1.3),
        ("so", 1.3),
        ("extremely", 1.5),
        ("absolutely", 1.5),
        ("totally", 1.4),
        ("too", 1.2),
        ("quite", 1.1),
        ("pretty", 1.1),
        ("most", 1.4),
    ]
    .into_iter()
    .collect()
});

static NEGATORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "cannot", "without"]
        .into_iter()
        .collect()
});

/// Deterministic lexical polarity scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalPolarityScorer;

impl LexicalPolarityScorer {
    pub fn new() -> Self {
        Self
    }

    fn is_negator(token: &str) -> bool {
        NEGATORS.contains(token) || token.ends_with("n't") || token.ends_with("n’t")
    }

    /// Polarity of each scored word, after modifiers
    fn word_scores(tokens: &[String]) -> Vec<f64> {
        let mut scores = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let Some(&base) = WORD_POLARITY.get(token.as_str()) else {
                continue;
            };

            let mut value = base;
            if let Some(factor) = i
                .checked_sub(1)
                .and_then(|prev| INTENSIFIERS.get(tokens[prev].as_str()))
            {
                value = (value * factor).clamp(-1.0, 1.0);
            }

            let window_start = i.saturating_sub(NEGATION_WINDOW);
            if tokens[window_start..i].iter().any(|t| Self::is_negator(t)) {
                value *= NEGATION_FACTOR;
            }

            scores.push(value);
        }

        scores
    }
}

impl PolarityScorer for LexicalPolarityScorer {
    fn score(&self, text: &str) -> Result<Polarity, ScoringError> {
        let tokens: Vec<String> = text.unicode_words().map(|w| w.to_lowercase()).collect();
        if tokens.is_empty() {
            return Ok(0.0);
        }

        let scores = Self::word_scores(&tokens);
        if scores.is_empty() {
            return Ok(0.0);
        }

        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        Ok(mean.clamp(-1.0, 1.0))
    }

    fn name(&self) -> &str {
        "lexical"
    }
}
