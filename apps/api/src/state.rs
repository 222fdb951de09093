use std::sync::Arc;

use crate::config::Config;
use crate::prediction::predictor::{SalaryPredictor, TablePredictor};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable predictor. Default: TablePredictor.
    pub predictor: Arc<dyn SalaryPredictor>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            predictor: Arc::new(TablePredictor),
        }
    }
}
