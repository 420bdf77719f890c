//! Synthetic demand and disruption models
//!
//! ## Table of Contents
//! - **FeatureVector**: Request features with per-field defaults
//! - **DemandPrediction / RiskPrediction**: Model outputs with their factors
//! - **RiskLevel**: Categorical risk derived from fixed thresholds
//! - **Predictor**: Draws predictions through a `RandomSource`
//! - **BatchReport**: Per-product batch run over the reference table
//!
//! None of these models are trained. Each output is a fixed baseline scaled by
//! calendar seasonality and a bounded random draw, and the reported factors are
//! exactly the terms that produced the value.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::reference::Product;
use crate::sampling::RandomSource;

pub const BASE_DEMAND: f64 = 1500.0;
pub const HOLIDAY_DEMAND_MULTIPLIER: f64 = 1.2;
pub const GROWTH_MULTIPLIER: f64 = 1.05;
pub const COMPETITION_RANGE: (f64, f64) = (0.9, 1.1);
pub const CONFIDENCE_RANGE: (f64, f64) = (0.85, 0.95);

pub const BASE_RISK: f64 = 0.15;
pub const WINTER_WEATHER_RISK: f64 = 0.1;
pub const MILD_WEATHER_RISK: f64 = 0.05;
pub const SUPPLY_RISK_RANGE: (f64, f64) = (0.05, 0.15);
pub const GEOPOLITICAL_RISK_RANGE: (f64, f64) = (0.02, 0.08);

/// Risk strictly above this is `High`.
pub const HIGH_RISK_THRESHOLD: f64 = 0.3;
/// Risk strictly above this (and not high) is `Medium`.
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.15;

// -----------------------------------------------------------------------------
// Features
// -----------------------------------------------------------------------------

/// Input features. The synthetic models accept them but do not read them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawFeatures")]
pub struct FeatureVector {
    pub feature1: f64,
    pub feature2: f64,
    pub feature3: f64,
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self {
            feature1: 1.0,
            feature2: 2.0,
            feature3: 3.0,
        }
    }
}

/// Wire shape: absent and `null` fields both fall back to the defaults.
#[derive(Debug, Deserialize)]
struct RawFeatures {
    feature1: Option<f64>,
    feature2: Option<f64>,
    feature3: Option<f64>,
}

impl From<RawFeatures> for FeatureVector {
    fn from(raw: RawFeatures) -> Self {
        let defaults = Self::default();
        Self {
            feature1: raw.feature1.unwrap_or(defaults.feature1),
            feature2: raw.feature2.unwrap_or(defaults.feature2),
            feature3: raw.feature3.unwrap_or(defaults.feature3),
        }
    }
}

// -----------------------------------------------------------------------------
// Outputs
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DemandFactors {
    pub seasonal_impact: f64,
    pub market_trend: f64,
    pub competition_factor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DemandPrediction {
    /// Predicted units, truncated
    pub prediction: u64,
    pub confidence: f64,
    pub factors: DemandFactors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classify a risk score against the fixed thresholds.
    pub fn classify(risk: f64) -> Self {
        if risk > HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if risk > MEDIUM_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskFactors {
    pub weather_risk: f64,
    pub supply_chain_risk: f64,
    pub geopolitical_risk: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskPrediction {
    /// Disruption risk in [0, 1]
    pub prediction: f64,
    pub risk_level: RiskLevel,
    pub factors: RiskFactors,
}

/// One product's entry in a batch run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchItem {
    pub product_id: String,
    pub product_name: String,
    pub demand_prediction: u64,
    pub demand_confidence: f64,
    pub disruption_risk: f64,
    pub risk_level: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub total_products: usize,
    pub average_demand: f64,
    pub average_risk: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub predictions: Vec<BatchItem>,
    pub summary: BatchSummary,
}

// -----------------------------------------------------------------------------
// Predictor
// -----------------------------------------------------------------------------

/// Months 11 and 12 carry holiday demand.
fn seasonal_multiplier(month: u32) -> f64 {
    if matches!(month, 11 | 12) {
        HOLIDAY_DEMAND_MULTIPLIER
    } else {
        1.0
    }
}

/// December through February carry winter weather risk.
fn weather_risk(month: u32) -> f64 {
    if matches!(month, 12 | 1 | 2) {
        WINTER_WEATHER_RISK
    } else {
        MILD_WEATHER_RISK
    }
}

/// Synthetic model front-end. Cheap to clone; all clones share one source.
#[derive(Clone)]
pub struct Predictor {
    source: Arc<dyn RandomSource>,
}

impl Predictor {
    pub fn new(source: Arc<dyn RandomSource>) -> Self {
        Self { source }
    }

    /// Name of the underlying randomness source
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Predict demand for the given calendar `month` (1-12).
    pub fn predict_demand(&self, features: &FeatureVector, month: u32) -> DemandPrediction {
        let seasonal_impact = seasonal_multiplier(month);
        let competition_factor = self.source.uniform(COMPETITION_RANGE.0, COMPETITION_RANGE.1);
        let confidence = self.source.uniform(CONFIDENCE_RANGE.0, CONFIDENCE_RANGE.1);

        let value = BASE_DEMAND * seasonal_impact * GROWTH_MULTIPLIER * competition_factor;
        let prediction = value.max(0.0).trunc() as u64;

        debug!(?features, month, prediction, confidence, "Demand prediction");

        DemandPrediction {
            prediction,
            confidence,
            factors: DemandFactors {
                seasonal_impact,
                market_trend: GROWTH_MULTIPLIER,
                competition_factor,
            },
        }
    }

    /// Predict disruption risk for the given calendar `month` (1-12).
    pub fn predict_disruption(&self, features: &FeatureVector, month: u32) -> RiskPrediction {
        let weather_risk = weather_risk(month);
        let supply_chain_risk = self.source.uniform(SUPPLY_RISK_RANGE.0, SUPPLY_RISK_RANGE.1);
        let geopolitical_risk =
            self.source.uniform(GEOPOLITICAL_RISK_RANGE.0, GEOPOLITICAL_RISK_RANGE.1);

        let risk = (BASE_RISK + weather_risk + supply_chain_risk + geopolitical_risk).clamp(0.0, 1.0);
        let risk_level = RiskLevel::classify(risk);

        debug!(?features, month, risk, level = risk_level.as_str(), "Disruption prediction");

        RiskPrediction {
            prediction: risk,
            risk_level,
            factors: RiskFactors {
                weather_risk,
                supply_chain_risk,
                geopolitical_risk,
            },
        }
    }

    /// Run both models for every product with the default feature vector.
    pub fn batch(&self, products: &[Product], month: u32) -> BatchReport {
        let features = FeatureVector::default();

        let predictions: Vec<BatchItem> = products
            .iter()
            .map(|product| {
                let demand = self.predict_demand(&features, month);
                let risk = self.predict_disruption(&features, month);
                BatchItem {
                    product_id: product.id.to_string(),
                    product_name: product.name.to_string(),
                    demand_prediction: demand.prediction,
                    demand_confidence: demand.confidence,
                    disruption_risk: risk.prediction,
                    risk_level: risk.risk_level,
                }
            })
            .collect();

        let count = predictions.len();
        let (average_demand, average_risk) = if count == 0 {
            (0.0, 0.0)
        } else {
            let demand_sum: f64 = predictions.iter().map(|p| p.demand_prediction as f64).sum();
            let risk_sum: f64 = predictions.iter().map(|p| p.disruption_risk).sum();
            (demand_sum / count as f64, risk_sum / count as f64)
        };

        BatchReport {
            predictions,
            summary: BatchSummary {
                total_products: count,
                average_demand,
                average_risk,
            },
        }
    }
}

impl std::fmt::Debug for Predictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predictor")
            .field("source", &self.source.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::reference_data;
    use crate::sampling::{SeededRandom, ThreadRandom};

    /// Always lands at the same fraction of the requested interval.
    struct FixedFraction(f64);

    impl RandomSource for FixedFraction {
        fn uniform(&self, low: f64, high: f64) -> f64 {
            low + (high - low) * self.0
        }
    }

    fn fixed(t: f64) -> Predictor {
        Predictor::new(Arc::new(FixedFraction(t)))
    }

    #[test]
    fn test_feature_defaults() {
        let features: FeatureVector = serde_json::from_str("{}").unwrap();
        assert_eq!(features, FeatureVector::default());

        let features: FeatureVector =
            serde_json::from_str(r#"{"feature2": 9.5, "feature3": null}"#).unwrap();
        assert_eq!(features.feature1, 1.0);
        assert_eq!(features.feature2, 9.5);
        assert_eq!(features.feature3, 3.0);
    }

    #[test]
    fn test_feature_wrong_type_rejected() {
        let result: Result<FeatureVector, _> = serde_json::from_str(r#"{"feature1": "high"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_demand_low_draw() {
        let prediction = fixed(0.0).predict_demand(&FeatureVector::default(), 6);

        assert_eq!(prediction.prediction, (1500.0 * 1.0 * 1.05 * 0.9_f64) as u64);
        assert_eq!(prediction.prediction, 1417);
        assert_eq!(prediction.confidence, 0.85);
        assert_eq!(prediction.factors.seasonal_impact, 1.0);
        assert_eq!(prediction.factors.market_trend, 1.05);
        assert_eq!(prediction.factors.competition_factor, 0.9);
    }

    #[test]
    fn test_demand_holiday_season() {
        let predictor = fixed(0.5);
        for month in [11, 12] {
            let prediction = predictor.predict_demand(&FeatureVector::default(), month);
            assert_eq!(prediction.factors.seasonal_impact, 1.2);
            let expected = (BASE_DEMAND * 1.2 * GROWTH_MULTIPLIER * prediction.factors.competition_factor) as u64;
            assert_eq!(prediction.prediction, expected);
        }
        let october = predictor.predict_demand(&FeatureVector::default(), 10);
        assert_eq!(october.factors.seasonal_impact, 1.0);
    }

    #[test]
    fn test_demand_bounds_random() {
        let predictor = Predictor::new(Arc::new(ThreadRandom));
        for month in 1..=12 {
            for _ in 0..200 {
                let p = predictor.predict_demand(&FeatureVector::default(), month);
                assert!((0.85..=0.95).contains(&p.confidence));
                assert!((0.9..=1.1).contains(&p.factors.competition_factor));
                // 1500 * 1.05 * [0.9, 1.1], up to 1.2 in the holidays
                assert!(p.prediction >= 1417 && p.prediction <= 2080, "{}", p.prediction);
            }
        }
    }

    #[test]
    fn test_disruption_low_and_high_draws() {
        let mild = fixed(0.0).predict_disruption(&FeatureVector::default(), 6);
        assert!((mild.prediction - 0.27).abs() < 1e-9);
        assert_eq!(mild.risk_level, RiskLevel::Medium);
        assert_eq!(mild.factors.weather_risk, 0.05);

        let winter = fixed(1.0).predict_disruption(&FeatureVector::default(), 1);
        assert!((winter.prediction - 0.48).abs() < 1e-9);
        assert_eq!(winter.risk_level, RiskLevel::High);
        assert_eq!(winter.factors.weather_risk, 0.1);
    }

    #[test]
    fn test_disruption_weather_by_month() {
        let predictor = fixed(0.5);
        for month in 1..=12 {
            let p = predictor.predict_disruption(&FeatureVector::default(), month);
            let expected = if matches!(month, 12 | 1 | 2) { 0.1 } else { 0.05 };
            assert_eq!(p.factors.weather_risk, expected, "month {}", month);
        }
    }

    #[test]
    fn test_disruption_factors_explain_prediction() {
        let predictor = Predictor::new(Arc::new(SeededRandom::new(11)));
        for month in 1..=12 {
            let p = predictor.predict_disruption(&FeatureVector::default(), month);
            let sum = BASE_RISK
                + p.factors.weather_risk
                + p.factors.supply_chain_risk
                + p.factors.geopolitical_risk;
            assert!((p.prediction - sum.min(1.0)).abs() < 1e-12);
            assert!((0.0..=1.0).contains(&p.prediction));
            assert_eq!(p.risk_level, RiskLevel::classify(p.prediction));
        }
    }

    #[test]
    fn test_disruption_clamped() {
        struct Huge;
        impl RandomSource for Huge {
            fn uniform(&self, _low: f64, _high: f64) -> f64 {
                5.0
            }
        }

        let p = Predictor::new(Arc::new(Huge)).predict_disruption(&FeatureVector::default(), 12);
        assert_eq!(p.prediction, 1.0);
        assert_eq!(p.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_risk_level_thresholds() {
        assert_eq!(RiskLevel::classify(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::classify(0.15), RiskLevel::Low);
        assert_eq!(RiskLevel::classify(0.1500001), RiskLevel::Medium);
        assert_eq!(RiskLevel::classify(0.3), RiskLevel::Medium);
        assert_eq!(RiskLevel::classify(0.3000001), RiskLevel::High);
        assert_eq!(RiskLevel::classify(1.0), RiskLevel::High);
    }

    #[test]
    fn test_risk_level_serializes_as_label() {
        assert_eq!(serde_json::to_string(&RiskLevel::Medium).unwrap(), "\"Medium\"");
    }

    #[test]
    fn test_seeded_predictors_agree() {
        let a = Predictor::new(Arc::new(SeededRandom::new(99)));
        let b = Predictor::new(Arc::new(SeededRandom::new(99)));

        assert_eq!(
            a.batch(&reference_data().products, 3),
            b.batch(&reference_data().products, 3)
        );
    }

    #[test]
    fn test_batch_one_per_product() {
        let products = &reference_data().products;
        let report = Predictor::new(Arc::new(ThreadRandom)).batch(products, 7);

        assert_eq!(report.predictions.len(), 5);
        assert_eq!(report.summary.total_products, 5);
        for (item, product) in report.predictions.iter().zip(products) {
            assert_eq!(item.product_id, product.id);
            assert_eq!(item.product_name, product.name);
        }

        let mean_demand = report
            .predictions
            .iter()
            .map(|p| p.demand_prediction as f64)
            .sum::<f64>()
            / 5.0;
        let mean_risk = report.predictions.iter().map(|p| p.disruption_risk).sum::<f64>() / 5.0;
        assert!((report.summary.average_demand - mean_demand).abs() < 1e-9);
        assert!((report.summary.average_risk - mean_risk).abs() < 1e-12);
    }

    #[test]
    fn test_batch_empty() {
        let report = fixed(0.5).batch(&[], 1);
        assert!(report.predictions.is_empty());
        assert_eq!(report.summary.average_demand, 0.0);
        assert_eq!(report.summary.average_risk, 0.0);
    }
}
