//! Language codes and display-language preferences

use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO-639-ish language code, or the `unknown` sentinel for detection failure
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub const ENGLISH: &'static str = "en";
    pub const TAMIL: &'static str = "ta";
    pub const UNKNOWN: &'static str = "unknown";

    /// Create a code, case-folded and trimmed. Blank input becomes `unknown`.
    pub fn new(code: impl AsRef<str>) -> Self {
        let code = code.as_ref().trim().to_lowercase();
        if code.is_empty() {
            Self::unknown()
        } else {
            Self(code)
        }
    }

    pub fn english() -> Self {
        Self(Self::ENGLISH.to_string())
    }

    pub fn tamil() -> Self {
        Self(Self::TAMIL.to_string())
    }

    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_english(&self) -> bool {
        self.0 == Self::ENGLISH
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for LanguageCode {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Caller's preference for the language of the returned label and text
///
/// On the wire this is a plain string; `no_option` disables localization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DisplayLanguage {
    /// Translate the label and normalized text into this language
    Localize(LanguageCode),
    /// Return the English label and omit the normalized text
    Disabled,
}

impl DisplayLanguage {
    /// Wire sentinel that disables output localization
    pub const DISABLED: &'static str = "no_option";

    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case(Self::DISABLED) {
            Self::Disabled
        } else if value.is_empty() {
            Self::default()
        } else {
            Self::Localize(LanguageCode::new(value))
        }
    }

    pub fn target(&self) -> Option<&LanguageCode> {
        match self {
            Self::Localize(code) => Some(code),
            Self::Disabled => None,
        }
    }
}

impl Default for DisplayLanguage {
    fn default() -> Self {
        Self::Localize(LanguageCode::english())
    }
}

impl From<String> for DisplayLanguage {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<DisplayLanguage> for String {
    fn from(value: DisplayLanguage) -> Self {
        match value {
            DisplayLanguage::Localize(code) => code.0,
            DisplayLanguage::Disabled => DisplayLanguage::DISABLED.to_string(),
        }
    }
}
