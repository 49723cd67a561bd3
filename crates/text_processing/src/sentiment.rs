//! Keyword-priority sentiment classification
//!
//! Explicit lexical signal wins over the polarity score. Lexicons are checked
//! in order happy, sad, neutral; the first label with a token contained in the
//! text decides. Only when nothing matches does the polarity sign decide.
//!
//! Matching is case-insensitive substring containment, not tokenized: "win"
//! matches inside "winter".
//!
//! # Example
//!
//! ```
//! use mozhi_core::SentimentLabel;
//! use mozhi_text_processing::KeywordClassifier;
//!
//! let classifier = KeywordClassifier::default();
//! let result = classifier.classify("so happy but sad", -0.9);
//! assert_eq!(result.label, SentimentLabel::Happy);
//! assert_eq!(result.emoji, "😊");
//! ```

use mozhi_config::LexiconSet;
use mozhi_core::{Classification, Polarity, SentimentLabel};

/// Why a label was chosen
#[derive(Debug, Clone, PartialEq)]
pub enum Decision<'a> {
    /// A lexicon token was found in the text
    Keyword { label: SentimentLabel, token: &'a str },
    /// No token matched; the polarity sign decided
    Polarity(Polarity),
}

/// Lexicon-then-polarity classifier
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    lexicon: LexiconSet,
}

impl KeywordClassifier {
    /// Create from a lexicon set; tokens are case-folded here
    pub fn new(lexicon: LexiconSet) -> Self {
        Self {
            lexicon: lexicon.normalized(),
        }
    }

    pub fn lexicon_version(&self) -> &str {
        &self.lexicon.version
    }

    /// Classify already-English-normalized text
    pub fn classify(&self, text: &str, polarity: Polarity) -> Classification {
        let label = match self.decide(text, polarity) {
            Decision::Keyword { label, .. } => label,
            Decision::Polarity(score) => SentimentLabel::from_polarity(score),
        };
        Classification::from(label)
    }

    /// Classification with the deciding token, for diagnostics
    pub fn decide(&self, text: &str, polarity: Polarity) -> Decision<'_> {
        let lower = text.to_lowercase();

        for label in SentimentLabel::PRIORITY {
            if let Some(token) = self
                .lexicon
                .tokens(label)
                .iter()
                .find(|token| lower.contains(token.as_str()))
            {
                return Decision::Keyword {
                    label,
                    token: token.as_str(),
                };
            }
        }

        Decision::Polarity(polarity)
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(LexiconSet::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str, polarity: Polarity) -> SentimentLabel {
        KeywordClassifier::default().classify(text, polarity).label
    }

    #[test]
    fn test_keyword_priority() {
        assert_eq!(classify("so happy but sad", 0.0), SentimentLabel::Happy);
        assert_eq!(classify("sad but okay", 0.0), SentimentLabel::Sad);
        assert_eq!(classify("feeling okay", 0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn test_keywords_override_polarity() {
        assert_eq!(classify("semma", -1.0), SentimentLabel::Happy);
        assert_eq!(classify("romba kashtam", 1.0), SentimentLabel::Sad);
        assert_eq!(classify("paravala", 0.9), SentimentLabel::Neutral);
    }

    #[test]
    fn test_polarity_fallback() {
        assert_eq!(classify("xyz qwerty", 0.5), SentimentLabel::Happy);
        assert_eq!(classify("xyz qwerty", -0.5), SentimentLabel::Sad);
        assert_eq!(classify("xyz qwerty", 0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn test_case_insensitive_substring() {
        assert_eq!(classify("SUPER", 0.0), SentimentLabel::Happy);
        // "win" inside "winter"
        assert_eq!(classify("winter", 0.0), SentimentLabel::Happy);
        // multi-word token
        assert_eq!(classify("it was a throat choke moment", 0.0), SentimentLabel::Sad);
    }

    #[test]
    fn test_emoji_always_matches_label() {
        let classifier = KeywordClassifier::default();
        for (text, polarity) in [("happy", 0.0), ("sad", 0.0), ("normal", 0.0), ("xyz", -0.2)] {
            let result = classifier.classify(text, polarity);
            assert_eq!(result.emoji, result.label.emoji());
        }
    }

    #[test]
    fn test_idempotent() {
        let classifier = KeywordClassifier::default();
        let first = classifier.classify("great victory", 0.65);
        let second = classifier.classify("great victory", 0.65);
        assert_eq!(first, second);
    }

    #[test]
    fn test_decision_reports_token() {
        let classifier = KeywordClassifier::default();
        assert_eq!(
            classifier.decide("what a great victory", 0.0),
            Decision::Keyword {
                label: SentimentLabel::Happy,
                token: "great"
            }
        );
        assert_eq!(classifier.decide("xyz", 0.3), Decision::Polarity(0.3));
    }

    #[test]
    fn test_custom_lexicon() {
        let lexicon = LexiconSet {
            version: "test".to_string(),
            happy: vec!["Yay".to_string()],
            sad: vec!["boo".to_string()],
            neutral: vec!["meh".to_string()],
        };
        let classifier = KeywordClassifier::new(lexicon);
        assert_eq!(classifier.lexicon_version(), "test");
        assert_eq!(classifier.classify("YAY", -1.0).label, SentimentLabel::Happy);
        assert_eq!(classifier.classify("happy", -1.0).label, SentimentLabel::Sad);
    }
}
