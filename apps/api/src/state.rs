use std::sync::Arc;

use crate::config::Config;
use crate::persona::presets::PresetCatalog;
use crate::persona::scoring::FitScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable fit scorer. Default: WeightedSumScorer.
    pub fit_scorer: Arc<dyn FitScorer>,
    /// Role presets, loaded once at startup.
    pub presets: Arc<PresetCatalog>,
}
