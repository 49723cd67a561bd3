//! Sentiment pipeline orchestrator
//!
//! Runs one request through the state machine
//! `Received -> LanguageResolved -> Normalized -> Scored -> Classified -> (Localized) -> Done`.
//! Collaborator failures never abort a request; each is replaced by its
//! fallback value and recorded as a [`Degradation`].

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use mozhi_config::{PipelineConfig, Settings};
use mozhi_core::{
    AnalysisRequest, AnalysisResult, Classification, Degradation, DetectionError, LanguageCode,
    LanguageDetector, LocalizedField, PipelineStage, Polarity, PolarityScorer, TranslationError,
    Translator,
};
use mozhi_text_processing::{
    create_translator, KeywordClassifier, LexicalPolarityScorer, NoopTranslator,
    ThanglishDetector, WhatlangDetector,
};

use crate::PipelineError;

/// Orchestrator configuration
#[derive(Debug, Clone, Copy)]
pub struct OrchestratorConfig {
    /// Bound on one detector call
    pub detection_timeout: Duration,
    /// Bound on one translator call
    pub translation_timeout: Duration,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self::from(&PipelineConfig::default())
    }
}

impl From<&PipelineConfig> for OrchestratorConfig {
    fn from(config: &PipelineConfig) -> Self {
        Self {
            detection_timeout: Duration::from_millis(config.detection_timeout_ms),
            translation_timeout: Duration::from_millis(config.translation_timeout_ms),
        }
    }
}

/// Stages and degradations collected while a request runs
#[derive(Debug, Default)]
struct Trace {
    stages: Vec<PipelineStage>,
    degradations: Vec<Degradation>,
}

impl Trace {
    fn enter(&mut self, stage: PipelineStage) {
        tracing::debug!(stage = %stage, "Pipeline transition");
        self.stages.push(stage);
    }

    fn degrade(&mut self, degradation: Degradation) {
        tracing::warn!(kind = degradation.kind(), ?degradation, "Falling back");
        self.degradations.push(degradation);
    }
}

/// Sentiment pipeline
///
/// Stateless between requests; share it behind an `Arc`.
pub struct SentimentPipeline {
    config: OrchestratorConfig,
    dialect: ThanglishDetector,
    detector: Arc<dyn LanguageDetector>,
    translator: Arc<dyn Translator>,
    scorer: Arc<dyn PolarityScorer>,
    classifier: KeywordClassifier,
}

impl SentimentPipeline {
    pub fn builder() -> SentimentPipelineBuilder {
        SentimentPipelineBuilder::default()
    }

    /// Wire the default collaborators from settings
    pub fn from_settings(settings: &Settings) -> Result<Self, PipelineError> {
        let dialect = match &settings.detection.thanglish_markers {
            Some(markers) => ThanglishDetector::with_markers(markers),
            None => ThanglishDetector::new(),
        };
        let detector = WhatlangDetector::with_min_confidence(settings.detection.min_confidence);
        let translator = create_translator(&settings.translation)?;
        let classifier = KeywordClassifier::new(settings.load_lexicon()?);

        tracing::info!(
            detector = detector.name(),
            translator = translator.name(),
            lexicon = classifier.lexicon_version(),
            markers = dialect.markers().len(),
            "Sentiment pipeline configured"
        );

        Ok(Self::builder()
            .config(OrchestratorConfig::from(&settings.pipeline))
            .dialect(dialect)
            .detector(Arc::new(detector))
            .translator(translator)
            .classifier(classifier)
            .build())
    }

    pub fn detector_name(&self) -> &str {
        self.detector.name()
    }

    pub fn translator_name(&self) -> &str {
        self.translator.name()
    }

    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }

    pub fn lexicon_version(&self) -> &str {
        self.classifier.lexicon_version()
    }

    /// Analyze one request. Never fails: every collaborator error has a fallback.
    pub async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult {
        let mut trace = Trace::default();
        trace.enter(PipelineStage::Received);

        let text = request.text();

        let original_language = self.resolve_language(text, &mut trace).await;
        trace.enter(PipelineStage::LanguageResolved);

        let normalized_text = self.normalize(text, &original_language, &mut trace).await;
        trace.enter(PipelineStage::Normalized);

        let polarity = self.score(&normalized_text, &mut trace);
        trace.enter(PipelineStage::Scored);

        let Classification { label, emoji } = self.classifier.classify(&normalized_text, polarity);
        trace.enter(PipelineStage::Classified);

        let (sentiment, translated_text) = match request.display_language().target() {
            Some(target) => {
                let (sentiment, text) = self
                    .localize(label.as_str(), &normalized_text, target, &mut trace)
                    .await;
                trace.enter(PipelineStage::Localized);
                (sentiment, Some(text))
            }
            None => (label.as_str().to_string(), None),
        };
        trace.enter(PipelineStage::Done);

        tracing::info!(
            language = %original_language,
            sentiment = %label,
            polarity,
            degraded = !trace.degradations.is_empty(),
            "Analysis complete"
        );

        AnalysisResult {
            sentiment,
            emoji,
            translated_text,
            original_language,
            label,
            polarity,
            normalized_text,
            degradations: trace.degradations,
            stages: trace.stages,
        }
    }

    /// Dialect markers win over the detector
    async fn resolve_language(&self, text: &str, trace: &mut Trace) -> LanguageCode {
        if let Some(marker) = self.dialect.matched_marker(text) {
            tracing::debug!(marker, "Romanized Tamil marker found");
            return LanguageCode::tamil();
        }

        let timeout_ms = millis(self.config.detection_timeout);
        let detected = bounded(self.config.detection_timeout, self.detector.detect(text))
            .await
            .unwrap_or(Err(DetectionError::Timeout(timeout_ms)));

        match detected {
            Ok(language) => language,
            Err(e) => {
                trace.degrade(Degradation::DetectionFailed {
                    reason: e.to_string(),
                });
                LanguageCode::unknown()
            }
        }
    }

    async fn normalize(&self, text: &str, source: &LanguageCode, trace: &mut Trace) -> String {
        if source.is_english() {
            return text.to_string();
        }

        match self.translate(self.translator.to_english(text, source)).await {
            Ok(normalized) => normalized,
            Err(e) => {
                trace.degrade(Degradation::NormalizationFailed {
                    reason: e.to_string(),
                });
                text.to_string()
            }
        }
    }

    fn score(&self, text: &str, trace: &mut Trace) -> Polarity {
        match self.scorer.score(text) {
            Ok(polarity) => polarity,
            Err(e) => {
                trace.degrade(Degradation::ScoringFailed {
                    reason: e.to_string(),
                });
                0.0
            }
        }
    }

    /// Localize the label and the normalized text; each falls back on its own
    async fn localize(
        &self,
        label: &str,
        text: &str,
        target: &LanguageCode,
        trace: &mut Trace,
    ) -> (String, String) {
        let (sentiment, localized) = tokio::join!(
            self.translate(self.translator.to_target(label, target)),
            self.translate(self.translator.to_target(text, target)),
        );

        let mut recover = |field: LocalizedField, result: Result<String, TranslationError>, fallback: &str| {
            result.unwrap_or_else(|e| {
                trace.degrade(Degradation::LocalizationFailed {
                    field,
                    reason: e.to_string(),
                });
                fallback.to_string()
            })
        };

        (
            recover(LocalizedField::Sentiment, sentiment, label),
            recover(LocalizedField::Text, localized, text),
        )
    }

    async fn translate<F>(&self, call: F) -> Result<String, TranslationError>
    where
        F: Future<Output = Result<String, TranslationError>>,
    {
        let timeout_ms = millis(self.config.translation_timeout);
        bounded(self.config.translation_timeout, call)
            .await
            .unwrap_or(Err(TranslationError::Timeout(timeout_ms)))
    }
}

impl std::fmt::Debug for SentimentPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentPipeline")
            .field("config", &self.config)
            .field("detector", &self.detector.name())
            .field("translator", &self.translator.name())
            .field("scorer", &self.scorer.name())
            .field("lexicon", &self.classifier.lexicon_version())
            .finish()
    }
}

/// `None` when the call did not finish in time
async fn bounded<F: Future>(limit: Duration, call: F) -> Option<F::Output> {
    tokio::time::timeout(limit, call).await.ok()
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Builder for [`SentimentPipeline`]
///
/// Unset collaborators default to the in-process implementations and a
/// pass-through translator.
#[derive(Default)]
pub struct SentimentPipelineBuilder {
    config: Option<OrchestratorConfig>,
    dialect: Option<ThanglishDetector>,
    detector: Option<Arc<dyn LanguageDetector>>,
    translator: Option<Arc<dyn Translator>>,
    scorer: Option<Arc<dyn PolarityScorer>>,
    classifier: Option<KeywordClassifier>,
}

impl SentimentPipelineBuilder {
    pub fn config(mut self, config: OrchestratorConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn dialect(mut self, dialect: ThanglishDetector) -> Self {
        self.dialect = Some(dialect);
        self
    }

    pub fn detector(mut self, detector: Arc<dyn LanguageDetector>) -> Self {
        self.detector = Some(detector);
        self
    }

    pub fn translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn scorer(mut self, scorer: Arc<dyn PolarityScorer>) -> Self {
        self.scorer = Some(scorer);
        self
    }

    pub fn classifier(mut self, classifier: KeywordClassifier) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn build(self) -> SentimentPipeline {
        SentimentPipeline {
            config: self.config.unwrap_or_default(),
            dialect: self.dialect.unwrap_or_default(),
            detector: self
                .detector
                .unwrap_or_else(|| Arc::new(WhatlangDetector::new())),
            translator: self
                .translator
                .unwrap_or_else(|| Arc::new(NoopTranslator::new())),
            scorer: self
                .scorer
                .unwrap_or_else(|| Arc::new(LexicalPolarityScorer::new())),
            classifier: self.classifier.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mozhi_core::{DisplayLanguage, SentimentLabel};

    #[tokio::test]
    async fn test_default_pipeline_passes_text_through() {
        let pipeline = SentimentPipeline::builder().build();
        let request = AnalysisRequest::new("I am so happy today", DisplayLanguage::Disabled).unwrap();

        let result = pipeline.analyze(&request).await;
        assert_eq!(result.label, SentimentLabel::Happy);
        assert_eq!(result.sentiment, "happy");
        assert_eq!(result.translated_text, None);
        assert_eq!(
            result.stages,
            vec![
                PipelineStage::Received,
                PipelineStage::LanguageResolved,
                PipelineStage::Normalized,
                PipelineStage::Scored,
                PipelineStage::Classified,
                PipelineStage::Done,
            ]
        );
    }

    #[tokio::test]
    async fn test_localized_stage_recorded() {
        let pipeline = SentimentPipeline::builder().build();
        let request = AnalysisRequest::new("semma", DisplayLanguage::default()).unwrap();

        let result = pipeline.analyze(&request).await;
        assert_eq!(result.original_language, LanguageCode::tamil());
        assert_eq!(result.translated_text.as_deref(), Some("semma"));
        assert!(result.stages.contains(&PipelineStage::Localized));
        assert_eq!(result.stages.last(), Some(&PipelineStage::Done));
    }

    #[test]
    fn test_config_from_settings() {
        let config = OrchestratorConfig::from(&PipelineConfig {
            detection_timeout_ms: 150,
            translation_timeout_ms: 900,
        });
        assert_eq!(config.detection_timeout, Duration::from_millis(150));
        assert_eq!(config.translation_timeout, Duration::from_millis(900));
    }

    #[test]
    fn test_from_settings_with_disabled_translation() {
        let mut settings = Settings::default();
        settings.translation.provider = mozhi_config::TranslationProvider::Disabled;

        let pipeline = SentimentPipeline::from_settings(&settings).unwrap();
        assert_eq!(pipeline.translator_name(), "noop");
        assert_eq!(pipeline.detector_name(), "whatlang");
        assert_eq!(pipeline.lexicon_version(), "builtin-1");
    }
}
