//! Integration tests for the HTTP translator against an in-process sidecar

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

use mozhi_core::{LanguageCode, TranslationError, Translator};
use mozhi_text_processing::{HttpTranslator, HttpTranslatorConfig};

#[derive(Clone, Default)]
struct Sidecar {
    calls: Arc<AtomicUsize>,
}

/// Fake sidecar: uppercases text, tags it with the direction, fails on "boom"
async fn translate(
    State(sidecar): State<Sidecar>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, String)> {
    sidecar.calls.fetch_add(1, Ordering::SeqCst);

    let text = body["text"].as_str().unwrap_or_default();
    if text == "boom" {
        return Err((StatusCode::SERVICE_UNAVAILABLE, "model not loaded".to_string()));
    }

    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("none");

    Ok(Json(json!({
        "translation": format!(
            "{}|{}->{}|{}",
            text.to_uppercase(),
            body["from"].as_str().unwrap_or_default(),
            body["to"].as_str().unwrap_or_default(),
            auth
        )
    })))
}

async fn garbage() -> Json<Value> {
    Json(json!({ "unexpected": true }))
}

async fn spawn_sidecar() -> (String, Sidecar) {
    let sidecar = Sidecar::default();
    let app = Router::new()
        .route("/translate", post(translate))
        .route("/garbage/translate", post(garbage))
        .with_state(sidecar.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), sidecar)
}

fn translator(endpoint: &str, api_key: Option<&str>) -> HttpTranslator {
    HttpTranslator::new(HttpTranslatorConfig {
        endpoint: endpoint.to_string(),
        api_key: api_key.map(str::to_string),
        timeout: Duration::from_secs(2),
        cache_enabled: true,
        cache_size: 16,
    })
    .unwrap()
}

#[tokio::test]
async fn test_to_english_sends_source_language() {
    let (endpoint, _) = spawn_sidecar().await;
    let translator = translator(&endpoint, None);

    let out = translator
        .to_english("semma vettri", &LanguageCode::tamil())
        .await
        .unwrap();
    assert_eq!(out, "SEMMA VETTRI|ta->en|none");
}

#[tokio::test]
async fn test_to_target_auto_detects_source() {
    let (endpoint, _) = spawn_sidecar().await;
    let translator = translator(&endpoint, Some("secret"));

    let out = translator.to_target("happy", &LanguageCode::tamil()).await.unwrap();
    assert_eq!(out, "HAPPY|auto->ta|Bearer secret");
}

#[tokio::test]
async fn test_cache_avoids_second_call() {
    let (endpoint, sidecar) = spawn_sidecar().await;
    let translator = translator(&endpoint, None);

    let first = translator.to_english("naan", &LanguageCode::tamil()).await.unwrap();
    let second = translator.to_english("naan", &LanguageCode::tamil()).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(sidecar.calls.load(Ordering::SeqCst), 1);
    assert_eq!(translator.cached_entries().await, 1);
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let (endpoint, _) = spawn_sidecar().await;
    let translator = translator(&endpoint, None);

    let err = translator
        .to_english("boom", &LanguageCode::tamil())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        TranslationError::Status {
            status: 503,
            body: "model not loaded".to_string()
        }
    );
    assert_eq!(translator.cached_entries().await, 0);
}

#[tokio::test]
async fn test_malformed_response_is_decode_error() {
    let (endpoint, _) = spawn_sidecar().await;
    let translator = translator(&format!("{}/garbage", endpoint), None);

    let err = translator
        .to_english("naan", &LanguageCode::tamil())
        .await
        .unwrap_err();
    assert!(matches!(err, TranslationError::Decode(_)));
}
