//! Observability Metrics
//!
//! Prometheus metrics endpoint for monitoring.

use std::sync::OnceLock;

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use mozhi_core::{AnalysisResult, SentimentLabel};

use crate::ServerError;

/// Global Prometheus handle
static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize metrics recorder
///
/// Installs a process-wide recorder, so call it once at startup.
pub fn init_metrics() -> Result<PrometheusHandle, ServerError> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Internal(format!("Prometheus recorder: {}", e)))?;

    register_default_metrics();

    METRICS_HANDLE.get_or_init(|| handle.clone());
    Ok(handle)
}

pub fn get_metrics_handle() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE.get()
}

fn register_default_metrics() {
    for endpoint in ["analyze", "health", "ready", "languages"] {
        counter!("mozhi_requests_total", "endpoint" => endpoint).absolute(0);
    }

    for label in SentimentLabel::PRIORITY {
        counter!("mozhi_sentiment_total", "label" => label.as_str()).absolute(0);
    }

    for kind in ["detection", "normalization", "scoring", "localization"] {
        counter!("mozhi_degradations_total", "kind" => kind).absolute(0);
    }
}

/// Record request to endpoint
pub fn record_request(endpoint: &'static str) {
    counter!("mozhi_requests_total", "endpoint" => endpoint).increment(1);
}

/// Record the outcome of one analysis
pub fn record_analysis(result: &AnalysisResult, duration_secs: f64) {
    counter!("mozhi_sentiment_total", "label" => result.label.as_str()).increment(1);
    for degradation in &result.degradations {
        counter!("mozhi_degradations_total", "kind" => degradation.kind()).increment(1);
    }
    histogram!("mozhi_analysis_duration_seconds").record(duration_secs);
}

/// Metrics endpoint handler
pub async fn metrics_handler() -> impl IntoResponse {
    match get_metrics_handle() {
        Some(handle) => (
            StatusCode::OK,
            [(
                header::CONTENT_TYPE,
                "text/plain; version=0.0.4; charset=utf-8",
            )],
            handle.render(),
        ),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::CONTENT_TYPE, "text/plain")],
            "Metrics not initialized".to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mozhi_core::{Degradation, LanguageCode};

    #[test]
    fn test_metric_helpers() {
        // No recorder installed; these must not panic
        record_request("analyze");
        record_analysis(
            &AnalysisResult {
                sentiment: "sad".into(),
                emoji: SentimentLabel::Sad.emoji(),
                translated_text: None,
                original_language: LanguageCode::unknown(),
                label: SentimentLabel::Sad,
                polarity: -0.4,
                normalized_text: "sad".into(),
                degradations: vec![Degradation::DetectionFailed {
                    reason: "undetermined".into(),
                }],
                stages: Vec::new(),
            },
            0.02,
        );
    }
}
