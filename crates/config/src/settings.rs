//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::{cache, endpoints, timeouts};
use crate::{ConfigError, LexiconSet};

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Language detection configuration
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Translation sidecar configuration
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Per-call timeouts used by the orchestrator
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Lexicon source
    #[serde(default)]
    pub lexicon: LexiconConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.detection.min_confidence) {
            return Err(ConfigError::InvalidValue {
                field: "detection.min_confidence".to_string(),
                message: "must be between 0.0 and 1.0".to_string(),
            });
        }

        if self.pipeline.detection_timeout_ms == 0 || self.pipeline.translation_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pipeline".to_string(),
                message: "timeouts must be greater than zero".to_string(),
            });
        }

        if matches!(self.translation.provider, TranslationProvider::Http)
            && !self.translation.endpoint.starts_with("http")
        {
            return Err(ConfigError::InvalidValue {
                field: "translation.endpoint".to_string(),
                message: format!("expected an http(s) URL, got '{}'", self.translation.endpoint),
            });
        }

        if let Some(markers) = &self.detection.thanglish_markers {
            if markers.iter().all(|m| m.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    field: "detection.thanglish_markers".to_string(),
                    message: "marker list is set but empty".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Resolve the lexicon: the configured file, or the built-in set
    pub fn load_lexicon(&self) -> Result<LexiconSet, ConfigError> {
        match &self.lexicon.path {
            Some(path) => LexiconSet::from_file(path),
            None => Ok(LexiconSet::builtin()),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server host
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// CORS allowed origins (empty = any)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_timeout() -> u64 {
    30
}
fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            timeout_seconds: default_timeout(),
            cors_enabled: true,
            cors_origins: Vec::new(),
        }
    }
}

/// Language detection configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Detections below this confidence count as failures (0.0 = always guess)
    #[serde(default)]
    pub min_confidence: f64,

    /// Replaces the built-in romanized-Tamil marker list when set
    #[serde(default)]
    pub thanglish_markers: Option<Vec<String>>,
}

/// Translation providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    /// HTTP/JSON translation sidecar
    #[default]
    Http,
    /// Disabled (pass-through)
    Disabled,
}

/// Translation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// Which provider to use
    #[serde(default)]
    pub provider: TranslationProvider,

    /// Sidecar base URL
    #[serde(default = "default_translator_endpoint")]
    pub endpoint: String,

    /// Optional bearer token (set via MOZHI__TRANSLATION__API_KEY)
    #[serde(default)]
    pub api_key: Option<String>,

    /// HTTP client timeout per request
    #[serde(default = "default_translation_timeout")]
    pub timeout_ms: u64,

    /// Cache translations in memory
    #[serde(default = "default_true")]
    pub cache_enabled: bool,

    /// Max cache entries
    #[serde(default = "default_cache_size")]
    pub cache_size: usize,
}

fn default_translator_endpoint() -> String {
    endpoints::TRANSLATOR_DEFAULT.to_string()
}
fn default_translation_timeout() -> u64 {
    timeouts::TRANSLATION_MS
}
fn default_cache_size() -> usize {
    cache::MAX_ENTRIES
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            provider: TranslationProvider::Http,
            endpoint: default_translator_endpoint(),
            api_key: None,
            timeout_ms: default_translation_timeout(),
            cache_enabled: true,
            cache_size: default_cache_size(),
        }
    }
}

/// Orchestrator timeouts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Bound on one detection call
    #[serde(default = "default_detection_timeout")]
    pub detection_timeout_ms: u64,

    /// Bound on one translation call
    #[serde(default = "default_translation_timeout")]
    pub translation_timeout_ms: u64,
}

fn default_detection_timeout() -> u64 {
    timeouts::DETECTION_MS
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            detection_timeout_ms: default_detection_timeout(),
            translation_timeout_ms: default_translation_timeout(),
        }
    }
}

/// Lexicon source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// YAML/TOML/JSON lexicon file; built-in lists when unset
    #[serde(default)]
    pub path: Option<String>,
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,

    /// Enable tracing export
    #[serde(default = "default_true")]
    pub tracing_enabled: bool,

    /// OTLP endpoint for traces
    #[serde(default)]
    pub otlp_endpoint: Option<String>,

    /// Enable the Prometheus /metrics endpoint
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
            tracing_enabled: true,
            otlp_endpoint: None,
            metrics_enabled: true,
        }
    }
}

/// Load settings from files and environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (MOZHI__ prefix, `__` separator)
/// 2. config/{env}.yaml (if env specified)
/// 3. config/default.yaml
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env {
        builder = builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("MOZHI")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.translation.provider, TranslationProvider::Http);
        assert_eq!(settings.translation.endpoint, "http://localhost:5000");
        assert!(settings.lexicon.path.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = Settings::default();
        settings.detection.min_confidence = 1.5;
        assert!(settings.validate().is_err());

        settings.detection.min_confidence = 0.2;
        assert!(settings.validate().is_ok());

        settings.pipeline.translation_timeout_ms = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_disabled_translation_skips_endpoint_check() {
        let mut settings = Settings::default();
        settings.translation.endpoint = "not-a-url".to_string();
        assert!(settings.validate().is_err());

        settings.translation.provider = TranslationProvider::Disabled;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_yaml() {
        let yaml = "translation:\n  provider: disabled\nserver:\n  port: 9000\n";
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.translation.provider, TranslationProvider::Disabled);
        assert_eq!(settings.pipeline.detection_timeout_ms, timeouts::DETECTION_MS);
    }

    #[test]
    fn test_builtin_lexicon_when_no_path() {
        let settings = Settings::default();
        let lexicon = settings.load_lexicon().unwrap();
        assert_eq!(lexicon, LexiconSet::builtin());
    }
}
