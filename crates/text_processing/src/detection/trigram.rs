//! Whatlang-based language detector
//!
//! Trigram detection via the `whatlang` crate, preceded by a script check so
//! Tamil-script input never depends on trigram statistics.

use async_trait::async_trait;
use mozhi_core::{DetectionError, LanguageCode, LanguageDetector};
use whatlang::Lang;

use super::ScriptDetector;

/// Share of letters an Indic script needs before it decides the language
const SCRIPT_MIN_SHARE: f32 = 0.5;

/// Whatlang-based language detector
#[derive(Debug, Clone)]
pub struct WhatlangDetector {
    script: ScriptDetector,
    min_confidence: f64,
}

impl WhatlangDetector {
    /// Create a detector that accepts every whatlang guess
    pub fn new() -> Self {
        Self::with_min_confidence(0.0)
    }

    /// Create a detector that rejects guesses below `min_confidence`
    pub fn with_min_confidence(min_confidence: f64) -> Self {
        tracing::info!(min_confidence, "Initializing Whatlang language detector");
        Self {
            script: ScriptDetector::new(),
            min_confidence,
        }
    }

    /// Synchronous detection, shared by the trait impl and tests
    pub fn detect_sync(&self, text: &str) -> Result<LanguageCode, DetectionError> {
        if let Some(code) = self.script.detect(text, SCRIPT_MIN_SHARE) {
            tracing::trace!(language = %code, "Language decided by script");
            return Ok(code);
        }

        let info = whatlang::detect(text).ok_or(DetectionError::Undetermined)?;
        let code = lang_to_code(info.lang());

        if info.confidence() < self.min_confidence {
            return Err(DetectionError::LowConfidence {
                language: code.unwrap_or(info.lang().code()).to_string(),
                confidence: info.confidence(),
            });
        }

        // No two-letter code: let the translator auto-detect
        Ok(code.map(LanguageCode::new).unwrap_or_else(LanguageCode::unknown))
    }
}

impl Default for WhatlangDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LanguageDetector for WhatlangDetector {
    async fn detect(&self, text: &str) -> Result<LanguageCode, DetectionError> {
        self.detect_sync(text)
    }

    fn name(&self) -> &str {
        "whatlang"
    }
}

/// ISO-639-1 code the translator accepts; `None` when the language has none
fn lang_to_code(lang: Lang) -> Option<&'static str> {
    let code = match lang {
        Lang::Eng => "en",
        Lang::Tam => "ta",
        Lang::Hin => "hi",
        Lang::Tel => "te",
        Lang::Kan => "kn",
        Lang::Mal => "ml",
        Lang::Ben => "bn",
        Lang::Guj => "gu",
        Lang::Pan => "pa",
        Lang::Ori => "or",
        Lang::Mar => "mr",
        Lang::Urd => "ur",
        Lang::Nep => "ne",
        Lang::Sin => "si",
        Lang::Fra => "fr",
        Lang::Spa => "es",
        Lang::Deu => "de",
        Lang::Ita => "it",
        Lang::Por => "pt",
        Lang::Nld => "nl",
        Lang::Rus => "ru",
        Lang::Ukr => "uk",
        Lang::Pol => "pl",
        Lang::Tur => "tr",
        Lang::Swe => "sv",
        Lang::Dan => "da",
        Lang::Nob => "nb",
        Lang::Fin => "fi",
        Lang::Est => "et",
        Lang::Lav => "lv",
        Lang::Lit => "lt",
        Lang::Ces => "cs",
        Lang::Slk => "sk",
        Lang::Slv => "sl",
        Lang::Hrv => "hr",
        Lang::Srp => "sr",
        Lang::Mkd => "mk",
        Lang::Bul => "bg",
        Lang::Bel => "be",
        Lang::Hun => "hu",
        Lang::Ron => "ro",
        Lang::Ell => "el",
        Lang::Cat => "ca",
        Lang::Lat => "la",
        Lang::Epo => "eo",
        Lang::Afr => "af",
        Lang::Ara => "ar",
        Lang::Heb => "he",
        Lang::Yid => "yi",
        Lang::Pes => "fa",
        Lang::Kat => "ka",
        Lang::Hye => "hy",
        Lang::Aze => "az",
        Lang::Uzb => "uz",
        Lang::Tuk => "tk",
        Lang::Amh => "am",
        Lang::Aka => "ak",
        Lang::Zul => "zu",
        Lang::Sna => "sn",
        Lang::Cmn => "zh",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Vie => "vi",
        Lang::Tha => "th",
        Lang::Khm => "km",
        Lang::Mya => "my",
        Lang::Ind => "id",
        Lang::Jav => "jv",
        Lang::Tgl => "tl",
        #[allow(unreachable_patterns)]
        _ => return None,
    };
    Some(code)
}
