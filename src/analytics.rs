//! Aggregate statistics over the reference table

use serde::Serialize;

use crate::reference::ReferenceData;

/// Products strictly above this risk count as high risk.
pub const HIGH_RISK_PRODUCT_THRESHOLD: f64 = 0.2;
/// Products strictly below this risk count as low risk.
pub const LOW_RISK_PRODUCT_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsSummary {
    pub total_products: usize,
    pub total_demand: u64,
    pub average_risk: f64,
    pub high_risk_products: usize,
    pub low_risk_products: usize,
    pub total_suppliers: usize,
    pub total_warehouses: usize,
}

impl AnalyticsSummary {
    /// Recompute the summary from `data`.
    pub fn compute(data: &ReferenceData) -> Self {
        let products = &data.products;
        let total_demand = products.iter().map(|p| u64::from(p.demand)).sum();
        let average_risk = if products.is_empty() {
            0.0
        } else {
            products.iter().map(|p| p.risk).sum::<f64>() / products.len() as f64
        };

        Self {
            total_products: products.len(),
            total_demand,
            average_risk,
            high_risk_products: products
                .iter()
                .filter(|p| p.risk > HIGH_RISK_PRODUCT_THRESHOLD)
                .count(),
            low_risk_products: products
                .iter()
                .filter(|p| p.risk < LOW_RISK_PRODUCT_THRESHOLD)
                .count(),
            total_suppliers: data.suppliers.len(),
            total_warehouses: data.warehouses.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{reference_data, Product};

    #[test]
    fn test_builtin_summary() {
        let summary = AnalyticsSummary::compute(reference_data());

        assert_eq!(summary.total_products, 5);
        assert_eq!(summary.total_demand, 5400);
        assert!((summary.average_risk - 0.136).abs() < 1e-9);
        assert_eq!(summary.high_risk_products, 1);
        assert_eq!(summary.low_risk_products, 2);
        assert_eq!(summary.total_suppliers, 3);
        assert_eq!(summary.total_warehouses, 3);
    }

    #[test]
    fn test_thresholds_are_strict() {
        let mut data = ReferenceData::builtin();
        data.products = vec![
            Product { id: "A", name: "edge-high", demand: 1, risk: 0.2 },
            Product { id: "B", name: "edge-low", demand: 1, risk: 0.1 },
        ];

        let summary = AnalyticsSummary::compute(&data);
        assert_eq!(summary.high_risk_products, 0);
        assert_eq!(summary.low_risk_products, 0);
    }

    #[test]
    fn test_empty_products() {
        let mut data = ReferenceData::builtin();
        data.products.clear();

        let summary = AnalyticsSummary::compute(&data);
        assert_eq!(summary.total_products, 0);
        assert_eq!(summary.total_demand, 0);
        assert_eq!(summary.average_risk, 0.0);
    }
}
