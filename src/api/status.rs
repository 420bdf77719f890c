// =============================================================================
// ChainTrack AI - Root, Health and Metrics
// =============================================================================

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

use crate::error::ApiError;
use crate::AppState;

pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub ai_models: &'static str,
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
    pub uptime_secs: u64,
}

/// Service banner and endpoint directory.
pub async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "ChainTrack AI API is running!",
        "version": SERVICE_VERSION,
        "endpoints": {
            "health": "GET /health",
            "predict_demand": "POST /predict/demand",
            "predict_disruption": "POST /predict/disruption",
            "mock_data": "GET /mock-data",
            "test_predictions": "GET /test-predictions",
            "analytics_summary": "GET /analytics/summary",
            "metrics": "GET /metrics",
        }
    }))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let now = Utc::now();
    let uptime_secs = (now - state.started_at).num_seconds().max(0) as u64;

    Json(HealthResponse {
        status: "healthy",
        ai_models: "loaded",
        timestamp: now,
        version: SERVICE_VERSION,
        uptime_secs,
    })
}

/// Prometheus text exposition.
pub async fn metrics(State(state): State<AppState>) -> Result<Response, ApiError> {
    let text = state
        .metrics
        .gather_text()
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        text,
    )
        .into_response())
}
