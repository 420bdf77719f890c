// =============================================================================
// ChainTrack AI - Prediction API
// =============================================================================
// Synthetic demand and disruption endpoints, plus the batch test run
// =============================================================================

use axum::{extract::State, Json};
use chrono::{Datelike, Utc};

use crate::api::extract::Features;
use crate::predictor::{BatchReport, DemandPrediction, RiskPrediction};
use crate::reference::reference_data;
use crate::AppState;

fn current_month() -> u32 {
    Utc::now().month()
}

/// Predict demand from a feature vector.
pub async fn predict_demand(
    State(state): State<AppState>,
    Features(features): Features,
) -> Json<DemandPrediction> {
    let prediction = state.predictor.predict_demand(&features, current_month());
    state.metrics.record_demand();
    Json(prediction)
}

/// Predict disruption risk from a feature vector.
pub async fn predict_disruption(
    State(state): State<AppState>,
    Features(features): Features,
) -> Json<RiskPrediction> {
    let prediction = state.predictor.predict_disruption(&features, current_month());
    state.metrics.record_disruption(prediction.risk_level);
    Json(prediction)
}

/// Run both models over every reference product.
pub async fn test_predictions(State(state): State<AppState>) -> Json<BatchReport> {
    let report = state.predictor.batch(&reference_data().products, current_month());

    state.metrics.record_batch();
    for item in &report.predictions {
        state.metrics.record_demand();
        state.metrics.record_disruption(item.risk_level);
    }

    tracing::info!(
        products = report.summary.total_products,
        average_demand = report.summary.average_demand,
        average_risk = report.summary.average_risk,
        "Batch test predictions complete"
    );

    Json(report)
}
