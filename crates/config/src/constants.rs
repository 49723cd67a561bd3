//! Centralized constants for the sentiment service
//!
//! Single source of truth for sentinels, default endpoints and timeouts used
//! across crates.

/// Wire sentinels
pub mod sentinels {
    /// Source language sent to the translator when it should auto-detect
    pub const AUTO_DETECT: &str = "auto";
}

/// Service endpoints (defaults for local development)
pub mod endpoints {
    /// Translation sidecar
    pub const TRANSLATOR_DEFAULT: &str = "http://localhost:5000";
}

/// Timeouts (in milliseconds)
pub mod timeouts {
    /// Language detection call
    pub const DETECTION_MS: u64 = 2_000;

    /// One translation round-trip
    pub const TRANSLATION_MS: u64 = 5_000;
}

/// Translation cache defaults
pub mod cache {
    pub const MAX_ENTRIES: usize = 1000;
}

/// Display languages offered by the web form, besides `no_option`
pub const DISPLAY_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("ta", "Tamil"),
    ("hi", "Hindi"),
    ("te", "Telugu"),
    ("ml", "Malayalam"),
    ("kn", "Kannada"),
    ("fr", "French"),
    ("es", "Spanish"),
    ("de", "German"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_outlasts_detection() {
        assert!(timeouts::DETECTION_MS <= timeouts::TRANSLATION_MS);
    }

    #[test]
    fn test_display_languages_include_tamil_and_english() {
        let codes: Vec<&str> = DISPLAY_LANGUAGES.iter().map(|(code, _)| *code).collect();
        assert!(codes.contains(&"en"));
        assert!(codes.contains(&"ta"));
        assert!(codes.iter().all(|code| code.len() == 2));
    }
}
