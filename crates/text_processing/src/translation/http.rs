//! HTTP/JSON translation sidecar client
//!
//! API format:
//! POST {endpoint}/translate
//! { "text": "...", "from": "ta" | "auto", "to": "en" }
//! Response: { "translation": "..." }

use async_trait::async_trait;
use mozhi_config::constants::sentinels;
use mozhi_config::TranslationConfig;
use mozhi_core::{LanguageCode, TranslationError, Translator};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;

/// HTTP translator configuration
#[derive(Debug, Clone)]
pub struct HttpTranslatorConfig {
    /// Base URL (http://host:port)
    pub endpoint: String,
    /// Bearer token, if the sidecar requires one
    pub api_key: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Enable caching
    pub cache_enabled: bool,
    /// Max cache entries
    pub cache_size: usize,
}

impl Default for HttpTranslatorConfig {
    fn default() -> Self {
        Self::from(&TranslationConfig::default())
    }
}

impl From<&TranslationConfig> for HttpTranslatorConfig {
    fn from(config: &TranslationConfig) -> Self {
        Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            timeout: Duration::from_millis(config.timeout_ms),
            cache_enabled: config.cache_enabled,
            cache_size: config.cache_size,
        }
    }
}

/// Bounded translation cache; clears half its entries when full
struct TranslationCache {
    entries: HashMap<String, String>,
    max_size: usize,
}

impl TranslationCache {
    fn new(max_size: usize) -> Self {
        Self {
            entries: HashMap::new(),
            max_size: max_size.max(1),
        }
    }

    fn make_key(text: &str, from: &str, to: &str) -> String {
        format!("{}:{}:{}", from, to, text)
    }

    fn get(&self, text: &str, from: &str, to: &str) -> Option<&str> {
        self.entries
            .get(&Self::make_key(text, from, to))
            .map(String::as_str)
    }

    fn insert(&mut self, text: &str, from: &str, to: &str, translation: String) {
        if self.entries.len() >= self.max_size {
            let keys_to_remove: Vec<_> = self
                .entries
                .keys()
                .take((self.max_size / 2).max(1))
                .cloned()
                .collect();
            for key in keys_to_remove {
                self.entries.remove(&key);
            }
        }
        self.entries
            .insert(Self::make_key(text, from, to), translation);
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    text: &'a str,
    from: &'a str,
    to: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    translation: String,
}

/// Translation sidecar client
///
/// One instance is shared by all requests; `reqwest::Client` pools
/// connections and the cache sits behind an async `RwLock`.
pub struct HttpTranslator {
    config: HttpTranslatorConfig,
    client: reqwest::Client,
    cache: RwLock<TranslationCache>,
}

impl HttpTranslator {
    /// Create a new HTTP translator
    pub fn new(config: HttpTranslatorConfig) -> Result<Self, TranslationError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TranslationError::Request(e.to_string()))?;
        let cache = RwLock::new(TranslationCache::new(config.cache_size));

        tracing::info!(
            endpoint = %config.endpoint,
            timeout_ms = config.timeout.as_millis() as u64,
            cache_enabled = config.cache_enabled,
            "Initialized HTTP translator"
        );

        Ok(Self {
            config,
            client,
            cache,
        })
    }

    /// Number of cached translations
    pub async fn cached_entries(&self) -> usize {
        self.cache.read().await.len()
    }

    async fn call_service(&self, text: &str, from: &str, to: &str) -> Result<String, TranslationError> {
        tracing::debug!(
            endpoint = %self.config.endpoint,
            from,
            to,
            text_len = text.len(),
            "Calling translation service"
        );

        let mut request = self
            .client
            .post(format!("{}/translate", self.config.endpoint))
            .json(&TranslateRequest { text, from, to });

        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                TranslationError::Timeout(self.config.timeout.as_millis() as u64)
            } else {
                TranslationError::Request(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(|e| TranslationError::Decode(e.to_string()))?;

        Ok(body.translation)
    }

    async fn translate_with_cache(&self, text: &str, from: &str, to: &str) -> Result<String, TranslationError> {
        if self.config.cache_enabled {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.get(text, from, to) {
                tracing::trace!(from, to, "Translation cache hit");
                return Ok(cached.to_string());
            }
        }

        let translation = self.call_service(text, from, to).await?;

        if self.config.cache_enabled {
            let mut cache = self.cache.write().await;
            cache.insert(text, from, to, translation.clone());
        }

        Ok(translation)
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(
        &self,
        text: &str,
        from: Option<&LanguageCode>,
        to: &LanguageCode,
    ) -> Result<String, TranslationError> {
        // Short-circuit if same language
        if from == Some(to) {
            return Ok(text.to_string());
        }

        if to.is_unknown() {
            return Err(TranslationError::Unsupported {
                from: from.map_or(sentinels::AUTO_DETECT, |l| l.as_str()).to_string(),
                to: to.to_string(),
            });
        }

        let from = from.map_or(sentinels::AUTO_DETECT, |l| l.as_str());
        self.translate_with_cache(text, from, to.as_str()).await
    }

    fn name(&self) -> &str {
        "http-translator"
    }
}
