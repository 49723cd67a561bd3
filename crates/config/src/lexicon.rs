//! Sentiment lexicons
//!
//! Label -> token lists used by the keyword classifier. The built-in set
//! covers English plus romanized Tamil slang; a versioned replacement can be
//! loaded from YAML, TOML or JSON without touching the classifier.
//!
//! ```yaml
//! version: "2024-06"
//! happy: [semma, vettri, happy]
//! sad: [kashtam, sad]
//! neutral: [paravala, okay]
//! ```

use mozhi_core::SentimentLabel;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ConfigError;

const BUILTIN_VERSION: &str = "builtin-1";

const HAPPY: &[&str] = &[
    "sandhosham", "jolly", "happy", "nalla", "perisu", "joy", "enjoy", "fun",
    "pleased", "excited", "bright", "cheerful", "smile", "sirippu", "santosham",
    "santosha", "arathanai", "magizhchi", "vettri", "win", "great", "chanceless",
    "super", "semma", "better", "nalla vela", "thrilled", "eager", "nalama",
    "enjoyment", "delighted", "achieve", "power", "enthusiastic", "awesome",
    "fantastic", "satisfaction", "success",
];

const SAD: &[&str] = &[
    "kashtam", "kastama", "kavala", "kavalaya", "kadupu", "kevalama", "kadupa",
    "eruchal", "eruchala", "sad", "varale", "sogam", "pain", "unhappy", "disappointed",
    "blue", "dull", "gloomy", "hurt", "frustrated", "verupu", "verupa", "aluthom",
    "thavani", "azha", "aavum", "kavani", "dislike", "depressed", "failure", "loss",
    "cry", "loser", "waste", "tension", "problem", "issue", "stress", "karpu",
    "valikuthu", "throat choke", "crying", "betrayed",
];

const NEUTRAL: &[&str] = &[
    "normal", "paravala", "pathukalam", "okay", "average", "steady", "chill",
    "regular", "nothing special", "nallavela", "ok", "ippodhiku", "so-so",
    "medium", "neutral", "moderate", "acceptable", "nothing much", "usual",
    "balanced", "neither", "idhellam sari", "middle", "manam iruka", "fine",
    "decent", "middle-ground", "undecided", "stable", "normalcy",
];

/// Versioned label -> token lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconSet {
    /// Free-form version tag, logged at load
    #[serde(default = "default_version")]
    pub version: String,
    pub happy: Vec<String>,
    pub sad: Vec<String>,
    pub neutral: Vec<String>,
}

fn default_version() -> String {
    "unversioned".to_string()
}

impl Default for LexiconSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LexiconSet {
    /// The lexicons shipped with the service
    pub fn builtin() -> Self {
        let owned = |tokens: &[&str]| tokens.iter().map(|t| t.to_string()).collect();
        Self {
            version: BUILTIN_VERSION.to_string(),
            happy: owned(HAPPY),
            sad: owned(SAD),
            neutral: owned(NEUTRAL),
        }
    }

    /// Load from a file; the format is chosen by extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileNotFound {
            path: path.display().to_string(),
            source: e,
        })?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let set: LexiconSet = match extension.as_deref() {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
            Some("toml") => {
                toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?
            }
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "lexicon.path".to_string(),
                    message: format!("unsupported lexicon format: {:?}", other),
                })
            }
        };

        let set = set.normalized();
        set.validate()?;

        tracing::info!(
            path = %path.display(),
            version = %set.version,
            happy = set.happy.len(),
            sad = set.sad.len(),
            neutral = set.neutral.len(),
            "Loaded sentiment lexicon"
        );
        Ok(set)
    }

    /// Case-fold and trim every token, dropping blanks
    pub fn normalized(mut self) -> Self {
        for list in [&mut self.happy, &mut self.sad, &mut self.neutral] {
            *list = list
                .iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect();
        }
        self
    }

    /// Every label needs at least one token
    pub fn validate(&self) -> Result<(), ConfigError> {
        for label in SentimentLabel::PRIORITY {
            let tokens = self.tokens(label);
            if tokens.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("lexicon.{}", label),
                    message: "lexicon must contain at least one token".to_string(),
                });
            }
            if tokens.iter().any(|t| t.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    field: format!("lexicon.{}", label),
                    message: "lexicon contains a blank token".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn tokens(&self, label: SentimentLabel) -> &[String] {
        match label {
            SentimentLabel::Happy => &self.happy,
            SentimentLabel::Sad => &self.sad,
            SentimentLabel::Neutral => &self.neutral,
        }
    }
}
