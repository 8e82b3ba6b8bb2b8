// Matching Engine
// Implements: criterion scorers, weighted aggregation, explanation synthesis, ranking.
// Pure and synchronous — no I/O, no shared mutable state. HTTP glue lives in handlers.

pub mod criteria;
pub mod error;
pub mod explain;
pub mod handlers;
pub mod models;
pub mod ranker;
pub mod scorer;
pub mod weights;

// Re-export the public API consumed by routes, state and main.
pub use error::MatchError;
pub use models::{CandidateProfile, JobRequirement, MatchResult};
pub use ranker::{rank_candidates_for_job, rank_jobs_for_candidate, score_pair, PairScore};
pub use scorer::{build_scorer, MatchScorer, RemoteRule, ScoringPolicy};
pub use weights::DEFAULT_WEIGHTS;
