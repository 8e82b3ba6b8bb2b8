use std::sync::Arc;

use crate::config::Config;
use crate::matching::MatchScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable match scorer. Default: ProfileScorer. Swap via MATCH_SCORING_POLICY.
    pub scorer: Arc<dyn MatchScorer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let scorer = crate::matching::build_scorer(
            config.scoring_policy,
            config.remote_rule,
            config.education_tolerance,
        );
        Self { config, scorer }
    }
}
