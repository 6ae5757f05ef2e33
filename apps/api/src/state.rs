use std::sync::Arc;

use crate::config::Config;
use crate::feed::catalog::JobSource;
use crate::feed::rejections::RejectionStore;
use crate::feed::scorer::SimilarityScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable job source. Default: the built-in `StaticCatalog`.
    pub jobs: Arc<dyn JobSource>,
    /// Scorer behind `POST /api/v1/feed/score`. Default: `TitleHeuristicScorer`.
    pub scorer: Arc<dyn SimilarityScorer>,
    pub rejections: Arc<RejectionStore>,
}
