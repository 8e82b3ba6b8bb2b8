//! Match Ranker — scores one anchor record against a batch of the opposite kind.
//!
//! Both directions go through the same `MatchScorer`, aggregator and
//! explanation, so a job/candidate pair scores identically either way round.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::error::MatchError;
use crate::matching::explain::explain;
use crate::matching::models::{CandidateProfile, JobRequirement, MatchResult, SubScores};
use crate::matching::scorer::MatchScorer;

/// Full result for one pair, including the per-criterion breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairScore {
    pub score: f64,
    pub explanation: String,
    pub breakdown: SubScores,
}

pub fn score_pair(
    scorer: &dyn MatchScorer,
    job: &JobRequirement,
    candidate: &CandidateProfile,
) -> Result<PairScore, MatchError> {
    let breakdown = scorer.sub_scores(job, candidate)?;
    Ok(PairScore {
        score: scorer.weights().aggregate(&breakdown),
        explanation: explain(&breakdown),
        breakdown,
    })
}

/// Jobs ranked best-first for one candidate.
pub fn rank_jobs_for_candidate(
    scorer: &dyn MatchScorer,
    candidate: &CandidateProfile,
    jobs: &[JobRequirement],
) -> Result<Vec<MatchResult>, MatchError> {
    let results = jobs
        .iter()
        .map(|job| score_pair(scorer, job, candidate).map(|pair| to_result(&job.id, pair)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(finish("candidate", &candidate.id, results))
}

/// Candidates ranked best-first for one job.
pub fn rank_candidates_for_job(
    scorer: &dyn MatchScorer,
    job: &JobRequirement,
    candidates: &[CandidateProfile],
) -> Result<Vec<MatchResult>, MatchError> {
    let results = candidates
        .iter()
        .map(|candidate| {
            score_pair(scorer, job, candidate).map(|pair| to_result(&candidate.id, pair))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(finish("job", &job.id, results))
}

fn to_result(other_id: &str, pair: PairScore) -> MatchResult {
    MatchResult {
        other_id: other_id.to_string(),
        score: pair.score,
        explanation: pair.explanation,
    }
}

/// Sorts descending by score. `sort_by` is stable, so equal scores keep input order.
fn finish(anchor_kind: &str, anchor_id: &str, mut results: Vec<MatchResult>) -> Vec<MatchResult> {
    results.sort_by(|a, b| b.score.total_cmp(&a.score));

    debug!(
        anchor_kind,
        anchor_id,
        ranked = results.len(),
        top_score = results.first().map(|r| r.score),
        "Ranked matches"
    );

    results
}
