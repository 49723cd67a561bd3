//! Unicode-block script detection
//!
//! Cheap first pass before trigram detection: text dominated by an Indic
//! script maps straight to its language.

use mozhi_core::LanguageCode;
use std::collections::HashMap;

/// Writing systems we can tell apart by code point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Latin,
    Arabic,
    Devanagari,
    Bengali,
    Gurmukhi,
    Gujarati,
    Odia,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Other,
}

impl Script {
    /// Language implied by a script, if unambiguous
    pub fn language(&self) -> Option<&'static str> {
        match self {
            Script::Tamil => Some("ta"),
            Script::Devanagari => Some("hi"),
            Script::Bengali => Some("bn"),
            Script::Gurmukhi => Some("pa"),
            Script::Gujarati => Some("gu"),
            Script::Odia => Some("or"),
            Script::Telugu => Some("te"),
            Script::Kannada => Some("kn"),
            Script::Malayalam => Some("ml"),
            // Latin and Arabic cover too many languages
            Script::Latin | Script::Arabic | Script::Other => None,
        }
    }
}

/// Script-based language detector
#[derive(Debug, Clone, Default)]
pub struct ScriptDetector;

impl ScriptDetector {
    pub fn new() -> Self {
        Self
    }

    /// Dominant script and the share of letters written in it
    pub fn dominant_script(&self, text: &str) -> Option<(Script, f32)> {
        let mut counts: HashMap<Script, usize> = HashMap::new();
        let mut total = 0usize;

        for c in text.chars() {
            if c.is_whitespace() || c.is_ascii_punctuation() || c.is_ascii_digit() {
                continue;
            }
            *counts.entry(Self::char_to_script(c)).or_insert(0) += 1;
            total += 1;
        }

        if total == 0 {
            return None;
        }

        counts
            .into_iter()
            .max_by_key(|(_, count)| *count)
            .map(|(script, count)| (script, count as f32 / total as f32))
    }

    /// Language for text dominated (> `min_share`) by an Indic script
    pub fn detect(&self, text: &str, min_share: f32) -> Option<LanguageCode> {
        let (script, share) = self.dominant_script(text)?;
        if share <= min_share {
            return None;
        }
        script.language().map(LanguageCode::new)
    }

    fn char_to_script(c: char) -> Script {
        match c as u32 {
            0x0041..=0x005A | 0x0061..=0x007A | 0x00C0..=0x024F => Script::Latin,
            0x0600..=0x06FF | 0x0750..=0x077F | 0x08A0..=0x08FF => Script::Arabic,
            0x0900..=0x097F | 0xA8E0..=0xA8FF => Script::Devanagari,
            0x0980..=0x09FF => Script::Bengali,
            0x0A00..=0x0A7F => Script::Gurmukhi,
            0x0A80..=0x0AFF => Script::Gujarati,
            0x0B00..=0x0B7F => Script::Odia,
            0x0B80..=0x0BFF => Script::Tamil,
            0x0C00..=0x0C7F => Script::Telugu,
            0x0C80..=0x0CFF => Script::Kannada,
            0x0D00..=0x0D7F => Script::Malayalam,
            _ => Script::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_tamil() {
        let detector = ScriptDetector::new();
        assert_eq!(detector.detect("வணக்கம்", 0.5), Some(LanguageCode::tamil()));
        assert_eq!(detector.dominant_script("வணக்கம்").map(|(s, _)| s), Some(Script::Tamil));
    }

    #[test]
    fn test_latin_defers() {
        let detector = ScriptDetector::new();
        assert_eq!(detector.detect("Hello world", 0.5), None);
        assert_eq!(detector.detect("semma vettri", 0.5), None);
    }

    #[test]
    fn test_no_letters() {
        let detector = ScriptDetector::new();
        assert!(detector.dominant_script("123 !!").is_none());
    }

    #[test]
    fn test_mixed_share_threshold() {
        let detector = ScriptDetector::new();
        // five Tamil code points against ten Latin letters
        assert_eq!(detector.detect("hellohello நன்றி", 0.5), None);
    }
}
