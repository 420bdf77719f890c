//! HTTP surface
//!
//! ## Table of Contents
//! - **extract**: Feature-vector extractor with 422 rejections
//! - **predictions**: `/predict/*` and `/test-predictions`
//! - **reference**: `/mock-data*` and `/analytics/summary`
//! - **status**: `/`, `/health` and `/metrics`

pub mod extract;
pub mod predictions;
pub mod reference;
pub mod status;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    let cors_enabled = state.config.cors_enabled;

    let router = Router::new()
        // Banner & health
        .route("/", get(status::root))
        .route("/health", get(status::health))
        .route("/metrics", get(status::metrics))
        // Predictions
        .route("/predict/demand", post(predictions::predict_demand))
        .route("/predict/disruption", post(predictions::predict_disruption))
        .route("/test-predictions", get(predictions::test_predictions))
        // Reference data
        .route("/mock-data", get(reference::get_mock_data))
        .route("/mock-data/products/:id", get(reference::get_product))
        .route("/mock-data/suppliers/:id", get(reference::get_supplier))
        .route("/mock-data/warehouses/:id", get(reference::get_warehouse))
        .route("/analytics/summary", get(reference::get_analytics_summary))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if cors_enabled {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router.layer(cors)
    } else {
        router
    }
}
