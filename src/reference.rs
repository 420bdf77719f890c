//! Static supply-chain reference data
//!
//! ## Table of Contents
//! - **Product / Supplier / Warehouse**: Reference records
//! - **ReferenceData**: The immutable table shared by every request
//! - **reference_data**: Accessor for the process-wide table

use serde::Serialize;

/// A product line with its baseline demand and disruption risk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    /// Baseline units per period
    pub demand: u32,
    /// Baseline disruption risk (0-1)
    pub risk: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Supplier {
    pub id: &'static str,
    pub name: &'static str,
    /// On-time delivery ratio (0-1)
    pub reliability: f64,
    pub lead_time_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Warehouse {
    pub id: &'static str,
    pub name: &'static str,
    /// Capacity in units
    pub capacity: u32,
    /// Fraction of capacity in use (0-1)
    pub utilization: f64,
}

/// Reference table served by `/mock-data` and used for analytics.
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceData {
    pub products: Vec<Product>,
    pub suppliers: Vec<Supplier>,
    pub warehouses: Vec<Warehouse>,
}

lazy_static::lazy_static! {
    static ref REFERENCE_DATA: ReferenceData = ReferenceData::builtin();
}

/// The process-wide reference table. Built on first access, never mutated.
pub fn reference_data() -> &'static ReferenceData {
    &REFERENCE_DATA
}

impl ReferenceData {
    /// The table bundled with the service.
    pub fn builtin() -> Self {
        Self {
            products: vec![
                Product { id: "P001", name: "Electronics", demand: 1200, risk: 0.12 },
                Product { id: "P002", name: "Clothing", demand: 800, risk: 0.08 },
                Product { id: "P003", name: "Food Items", demand: 2000, risk: 0.25 },
                Product { id: "P004", name: "Automotive", demand: 500, risk: 0.18 },
                Product { id: "P005", name: "Home & Garden", demand: 900, risk: 0.05 },
            ],
            suppliers: vec![
                Supplier { id: "S001", name: "Global Electronics Co", reliability: 0.95, lead_time_days: 7 },
                Supplier { id: "S002", name: "Fashion Forward Ltd", reliability: 0.88, lead_time_days: 14 },
                Supplier { id: "S003", name: "Fresh Foods Inc", reliability: 0.92, lead_time_days: 3 },
            ],
            warehouses: vec![
                Warehouse { id: "W001", name: "North Distribution Center", capacity: 50_000, utilization: 0.75 },
                Warehouse { id: "W002", name: "South Logistics Hub", capacity: 35_000, utilization: 0.82 },
                Warehouse { id: "W003", name: "East Coast Fulfillment", capacity: 42_000, utilization: 0.68 },
            ],
        }
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.eq_ignore_ascii_case(id))
    }

    pub fn supplier(&self, id: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.id.eq_ignore_ascii_case(id))
    }

    pub fn warehouse(&self, id: &str) -> Option<&Warehouse> {
        self.warehouses.iter().find(|w| w.id.eq_ignore_ascii_case(id))
    }
}
