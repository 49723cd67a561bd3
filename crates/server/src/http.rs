//! HTTP Endpoints
//!
//! REST API for sentiment analysis.

use std::time::{Duration, Instant};

use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderValue,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::Instrument;

use mozhi_config::constants::DISPLAY_LANGUAGES;
use mozhi_config::ServerConfig;
use mozhi_core::{AnalysisRequest, AnalysisResult, DisplayLanguage};

use crate::metrics::{metrics_handler, record_analysis, record_request};
use crate::state::AppState;
use crate::ServerError;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let server = &state.config.server;

    let mut router = Router::new()
        .route("/analyze", post(analyze))
        .route("/api/languages", get(list_languages))
        // Health check
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check));

    if state.config.observability.metrics_enabled {
        router = router.route("/metrics", get(metrics_handler));
    }

    let router = router
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(server.timeout_seconds)));

    let router = match cors_layer(server) {
        Some(cors) => router.layer(cors),
        None => router,
    };

    router.with_state(state)
}

/// `None` when CORS is disabled; empty origin list allows any origin
fn cors_layer(config: &ServerConfig) -> Option<CorsLayer> {
    if !config.cors_enabled {
        return None;
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    Some(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}

/// Analyze request body
#[derive(Debug, Deserialize)]
struct AnalyzeBody {
    text: Option<String>,
    display_language: Option<String>,
}

/// Analyze endpoint
async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeBody>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ServerError> {
    record_request("analyze");

    let Json(body) = payload.map_err(|rejection| ServerError::InvalidRequest(rejection.body_text()))?;
    let request = AnalysisRequest::from_parts(body.text, body.display_language)?;

    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!(
        "analyze",
        %request_id,
        display_language = %String::from(request.display_language().clone()),
    );

    let started = Instant::now();
    let result = state.pipeline.analyze(&request).instrument(span).await;
    record_analysis(&result, started.elapsed().as_secs_f64());

    Ok(Json(result))
}

/// Display languages offered for localization
async fn list_languages() -> impl IntoResponse {
    record_request("languages");

    let languages: Vec<_> = DISPLAY_LANGUAGES
        .iter()
        .map(|(code, name)| serde_json::json!({ "code": code, "name": name }))
        .collect();

    Json(serde_json::json!({
        "languages": languages,
        "disabled": DisplayLanguage::DISABLED,
    }))
}

/// Health check
async fn health_check() -> impl IntoResponse {
    record_request("health");

    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness check
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    record_request("ready");

    let pipeline = &state.pipeline;
    Json(serde_json::json!({
        "status": "ready",
        "detector": pipeline.detector_name(),
        "translator": pipeline.translator_name(),
        "scorer": pipeline.scorer_name(),
        "lexicon": pipeline.lexicon_version(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use mozhi_config::Settings;
    use mozhi_core::{DetectionError, LanguageCode, LanguageDetector, TranslationError, Translator};
    use mozhi_pipeline::SentimentPipeline;

    struct EnglishDetector;

    #[async_trait]
    impl LanguageDetector for EnglishDetector {
        async fn detect(&self, _text: &str) -> Result<LanguageCode, DetectionError> {
            Ok(LanguageCode::english())
        }

        fn name(&self) -> &str {
            "english"
        }
    }

    /// Prefixes the target code and counts calls
    #[derive(Default)]
    struct TaggingTranslator {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Translator for TaggingTranslator {
        async fn translate(
            &self,
            text: &str,
            _from: Option<&LanguageCode>,
            to: &LanguageCode,
        ) -> Result<String, TranslationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("[{}] {}", to, text))
        }

        fn name(&self) -> &str {
            "tagging"
        }
    }

    fn app() -> (Router, Arc<TaggingTranslator>) {
        let translator = Arc::new(TaggingTranslator::default());
        let pipeline = SentimentPipeline::builder()
            .detector(Arc::new(EnglishDetector))
            .translator(translator.clone())
            .build();
        let router = create_router(AppState::new(Settings::default(), pipeline));
        (router, translator)
    }

    async fn post_json(router: Router, body: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::post("/analyze")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        read_json(response).await
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        read_json(response).await
    }

    async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_router_creation() {
        let state = AppState::new(Settings::default(), SentimentPipeline::builder().build());
        let _ = create_router(state);
    }

    #[tokio::test]
    async fn test_analyze_without_localization() {
        let (router, translator) = app();
        let (status, body) =
            post_json(router, r#"{"text": "semma vettri", "display_language": "no_option"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "sentiment": "happy", "emoji": "😊", "original_language": "ta" })
        );
        // normalization only
        assert_eq!(translator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_analyze_localizes_output() {
        let (router, _) = app();
        let (status, body) =
            post_json(router, r#"{"text": "I feel sad today", "display_language": "ta"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sentiment"], "[ta] sad");
        assert_eq!(body["emoji"], "😢");
        assert_eq!(body["translated_text"], "[ta] I feel sad today");
        assert_eq!(body["original_language"], "en");
    }

    #[tokio::test]
    async fn test_analyze_defaults_display_language_to_english() {
        let (router, _) = app();
        let (status, body) = post_json(router, r#"{"text": "it was okay"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sentiment"], "[en] neutral");
        assert_eq!(body["emoji"], "😐");
        assert_eq!(body["translated_text"], "[en] it was okay");
    }

    #[tokio::test]
    async fn test_missing_or_empty_text_is_rejected() {
        for payload in [r#"{"display_language": "ta"}"#, r#"{"text": ""}"#, "{}"] {
            let (router, translator) = app();
            let (status, body) = post_json(router, payload).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {}", payload);
            assert_eq!(body, json!({ "error": "No text provided" }));
            assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let (router, translator) = app();
        let (status, body) = post_json(router, "{not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
        assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_health() {
        let (router, _) = app();
        let (status, body) = get_json(router, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_ready_reports_collaborators() {
        let (router, _) = app();
        let (status, body) = get_json(router, "/ready").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["detector"], "english");
        assert_eq!(body["translator"], "tagging");
        assert_eq!(body["lexicon"], "builtin-1");
    }

    #[tokio::test]
    async fn test_languages() {
        let (router, _) = app();
        let (status, body) = get_json(router, "/api/languages").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["disabled"], "no_option");
        let codes: Vec<&str> = body["languages"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|l| l["code"].as_str())
            .collect();
        assert!(codes.contains(&"en"));
        assert!(codes.contains(&"ta"));
    }

    #[test]
    fn test_cors_layer_respects_config() {
        let mut config = ServerConfig::default();
        assert!(cors_layer(&config).is_some());

        config.cors_origins = vec!["http://localhost:3000".to_string()];
        assert!(cors_layer(&config).is_some());

        config.cors_enabled = false;
        assert!(cors_layer(&config).is_none());
    }
}
