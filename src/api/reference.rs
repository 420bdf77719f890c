// =============================================================================
// ChainTrack AI - Reference Data API
// =============================================================================

use axum::{extract::Path, Json};

use crate::analytics::AnalyticsSummary;
use crate::error::ApiError;
use crate::reference::{reference_data, Product, ReferenceData, Supplier, Warehouse};

/// Full reference table.
pub async fn get_mock_data() -> Json<&'static ReferenceData> {
    Json(reference_data())
}

pub async fn get_product(Path(id): Path<String>) -> Result<Json<&'static Product>, ApiError> {
    reference_data()
        .product(&id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Product {} not found", id)))
}

pub async fn get_supplier(Path(id): Path<String>) -> Result<Json<&'static Supplier>, ApiError> {
    reference_data()
        .supplier(&id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Supplier {} not found", id)))
}

pub async fn get_warehouse(Path(id): Path<String>) -> Result<Json<&'static Warehouse>, ApiError> {
    reference_data()
        .warehouse(&id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Warehouse {} not found", id)))
}

/// Aggregate statistics, recomputed on every call.
pub async fn get_analytics_summary() -> Json<AnalyticsSummary> {
    Json(AnalyticsSummary::compute(reference_data()))
}
