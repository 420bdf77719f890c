//! # ChainTrack AI
//!
//! A demo prediction API for supply-chain dashboards. Demand and disruption
//! "predictions" are bounded random draws around fixed baselines, served next
//! to a static table of products, suppliers and warehouses.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chaintrack_ai::{api, AppState, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), chaintrack_ai::ServiceError> {
//!     let config = Config::from_env()?;
//!     let bind = config.bind_address;
//!     let app = api::create_router(AppState::new(config)?);
//!
//!     let listener = tokio::net::TcpListener::bind(bind).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod predictor;
pub mod reference;
pub mod sampling;

use std::sync::Arc;

use chrono::{DateTime, Utc};

pub use config::{Config, ConfigError};
pub use error::{ApiError, ServiceError};
pub use metrics::ServiceMetrics;
pub use predictor::{FeatureVector, Predictor, RiskLevel};
pub use sampling::{RandomSource, SeededRandom, ThreadRandom};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub predictor: Predictor,
    pub metrics: Arc<ServiceMetrics>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Build state from configuration, seeding the RNG when a seed is set.
    pub fn new(config: Config) -> Result<Self, ServiceError> {
        let source: Arc<dyn RandomSource> = match config.prediction_seed {
            Some(seed) => Arc::new(SeededRandom::new(seed)),
            None => Arc::new(ThreadRandom),
        };
        Self::with_source(config, source)
    }

    /// Build state around an explicit randomness source.
    pub fn with_source(config: Config, source: Arc<dyn RandomSource>) -> Result<Self, ServiceError> {
        Ok(Self {
            config: Arc::new(config),
            predictor: Predictor::new(source),
            metrics: Arc::new(ServiceMetrics::new()?),
            started_at: Utc::now(),
        })
    }
}
