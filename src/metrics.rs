//! Prometheus metrics for the prediction endpoints
//!
//! ## Table of Contents
//! - **ServiceMetrics**: Counters for served predictions, risk levels and batch runs

use prometheus::{Counter, CounterVec, Opts, Registry};

use crate::error::ServiceError;
use crate::predictor::RiskLevel;

/// Core metrics for the prediction service
pub struct ServiceMetrics {
    registry: Registry,

    pub predictions_total: CounterVec,
    pub risk_levels_total: CounterVec,
    pub batch_runs_total: Counter,
}

impl ServiceMetrics {
    /// Create and register all metrics on a fresh registry
    pub fn new() -> Result<Self, ServiceError> {
        let registry = Registry::new();

        let predictions_total = CounterVec::new(
            Opts::new("chaintrack_predictions_total", "Total synthetic predictions served"),
            &["kind"],
        )?;
        let risk_levels_total = CounterVec::new(
            Opts::new("chaintrack_risk_levels_total", "Disruption predictions by risk level"),
            &["level"],
        )?;
        let batch_runs_total =
            Counter::new("chaintrack_batch_runs_total", "Total batch test prediction runs")?;

        registry.register(Box::new(predictions_total.clone()))?;
        registry.register(Box::new(risk_levels_total.clone()))?;
        registry.register(Box::new(batch_runs_total.clone()))?;

        Ok(Self {
            registry,
            predictions_total,
            risk_levels_total,
            batch_runs_total,
        })
    }

    pub fn record_demand(&self) {
        self.predictions_total.with_label_values(&["demand"]).inc();
    }

    pub fn record_disruption(&self, level: RiskLevel) {
        self.predictions_total.with_label_values(&["disruption"]).inc();
        self.risk_levels_total.with_label_values(&[level.as_str()]).inc();
    }

    pub fn record_batch(&self) {
        self.batch_runs_total.inc();
    }

    /// Gather all metrics as text
    pub fn gather_text(&self) -> Result<String, ServiceError> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| ServiceError::Metrics(format!("UTF8 error: {}", e)))
    }
}
