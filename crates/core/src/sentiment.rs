//! Sentiment labels, emoji glyphs and polarity scores

use serde::{Deserialize, Serialize};
use std::fmt;

/// Continuous polarity in [-1.0, 1.0]; 0 is neutral
pub type Polarity = f64;

/// Discrete sentiment label, exactly one per request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Happy,
    Sad,
    Neutral,
}

impl SentimentLabel {
    /// All labels in classification priority order
    pub const PRIORITY: [SentimentLabel; 3] = [
        SentimentLabel::Happy,
        SentimentLabel::Sad,
        SentimentLabel::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Happy => "happy",
            SentimentLabel::Sad => "sad",
            SentimentLabel::Neutral => "neutral",
        }
    }

    /// Glyph keyed 1:1 to the label
    pub fn emoji(&self) -> &'static str {
        match self {
            SentimentLabel::Happy => "😊",
            SentimentLabel::Sad => "😢",
            SentimentLabel::Neutral => "😐",
        }
    }

    /// Label for a polarity score, used when no lexicon token matches
    pub fn from_polarity(polarity: Polarity) -> Self {
        if polarity > 0.0 {
            SentimentLabel::Happy
        } else if polarity < 0.0 {
            SentimentLabel::Sad
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the classifier: a label and its glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub label: SentimentLabel,
    pub emoji: &'static str,
}

impl From<SentimentLabel> for Classification {
    fn from(label: SentimentLabel) -> Self {
        Self {
            label,
            emoji: label.emoji(),
        }
    }
}
