//! Romanized-Tamil ("Thanglish") heuristic
//!
//! Trigram detectors read Thanglish as English or noise. A fixed marker list
//! catches it instead; a hit forces Tamil as the source language.

/// Built-in markers. Matching is substring-based, so markers that occur
/// inside common English words ("enna" in "antenna", "illa" in "vanilla")
/// are left out.
pub const DEFAULT_MARKERS: &[&str] = &[
    "naan",
    "kadhal",
    "vettri",
    "semma",
    "romba",
    "eppadi",
    "epdi",
    "irukku",
    "vanakkam",
    "nandri",
    "sandhosham",
    "magizhchi",
    "kashtam",
    "kavalai",
    "machan",
    "paravala",
    "pathukalam",
    "nallavela",
    "sogam",
    "thalaivar",
];

/// Case-insensitive substring test against romanized-Tamil markers
#[derive(Debug, Clone)]
pub struct ThanglishDetector {
    markers: Vec<String>,
}

impl ThanglishDetector {
    /// Detector with the built-in markers
    pub fn new() -> Self {
        Self::with_markers(DEFAULT_MARKERS.iter().copied())
    }

    /// Detector with a custom marker list; markers are case-folded, blanks dropped
    pub fn with_markers<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let markers = markers
            .into_iter()
            .map(|m| m.as_ref().trim().to_lowercase())
            .filter(|m| !m.is_empty())
            .collect();
        Self { markers }
    }

    pub fn is_thanglish(&self, text: &str) -> bool {
        self.matched_marker(text).is_some()
    }

    /// First marker found in `text`
    pub fn matched_marker(&self, text: &str) -> Option<&str> {
        let lower = text.to_lowercase();
        self.markers
            .iter()
            .find(|marker| lower.contains(marker.as_str()))
            .map(String::as_str)
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }
}

impl Default for ThanglishDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_markers() {
        let detector = ThanglishDetector::new();
        assert!(detector.is_thanglish("semma vettri"));
        assert!(detector.is_thanglish("Naan romba happy"));
        assert!(detector.is_thanglish("KADHAL"));
    }

    #[test]
    fn test_plain_english() {
        let detector = ThanglishDetector::new();
        assert!(!detector.is_thanglish("This is a plain English sentence about an antenna"));
        assert!(!detector.is_thanglish("vanilla ice cream"));
    }

    #[test]
    fn test_substring_match_inside_word() {
        let detector = ThanglishDetector::new();
        assert_eq!(detector.matched_marker("supersemmaaa"), Some("semma"));
    }

    #[test]
    fn test_custom_markers() {
        let detector = ThanglishDetector::with_markers(["  Poda ", ""]);
        assert_eq!(detector.markers(), ["poda".to_string()]);
        assert!(detector.is_thanglish("poda dei"));
        assert!(!detector.is_thanglish("semma"));
    }
}
