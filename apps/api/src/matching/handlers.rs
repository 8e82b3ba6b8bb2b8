//! Axum route handlers for the Matching API.
//!
//! Validates record shape at the boundary, then hands off to the ranker and
//! returns its output unchanged.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::matching::models::ensure_unique_ids;
use crate::matching::{
    rank_candidates_for_job, rank_jobs_for_candidate, score_pair, CandidateProfile,
    JobRequirement, MatchError, MatchResult, PairScore,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RankJobsRequest {
    pub candidate: CandidateProfile,
    #[serde(default)]
    pub jobs: Vec<JobRequirement>,
}

#[derive(Debug, Deserialize)]
pub struct RankCandidatesRequest {
    pub job: JobRequirement,
    #[serde(default)]
    pub candidates: Vec<CandidateProfile>,
}

#[derive(Debug, Deserialize)]
pub struct ScorePairRequest {
    pub job: JobRequirement,
    pub candidate: CandidateProfile,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub matches: Vec<MatchResult>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match/jobs
///
/// Ranks the submitted jobs for one candidate, best first.
pub async fn handle_rank_jobs(
    State(state): State<AppState>,
    Json(request): Json<RankJobsRequest>,
) -> Result<Json<RankResponse>, AppError> {
    validate_batch(
        (request.candidate.id.as_str(), request.candidate.validate()),
        request.jobs.iter().map(|j| (j.id.as_str(), j.validate())),
    )?;

    let matches =
        rank_jobs_for_candidate(state.scorer.as_ref(), &request.candidate, &request.jobs)?;

    Ok(Json(RankResponse { matches }))
}

/// POST /api/v1/match/candidates
///
/// Ranks the submitted candidates for one job, best first.
pub async fn handle_rank_candidates(
    State(state): State<AppState>,
    Json(request): Json<RankCandidatesRequest>,
) -> Result<Json<RankResponse>, AppError> {
    validate_batch(
        (request.job.id.as_str(), request.job.validate()),
        request.candidates.iter().map(|c| (c.id.as_str(), c.validate())),
    )?;

    let matches =
        rank_candidates_for_job(state.scorer.as_ref(), &request.job, &request.candidates)?;

    Ok(Json(RankResponse { matches }))
}

/// POST /api/v1/match/score
///
/// Scores a single job/candidate pair and includes the per-criterion breakdown.
pub async fn handle_score_pair(
    State(state): State<AppState>,
    Json(request): Json<ScorePairRequest>,
) -> Result<Json<PairScore>, AppError> {
    request
        .job
        .validate()
        .map_err(|e| rejected(&request.job.id, e))?;
    request
        .candidate
        .validate()
        .map_err(|e| rejected(&request.candidate.id, e))?;

    let pair = score_pair(state.scorer.as_ref(), &request.job, &request.candidate)?;
    Ok(Json(pair))
}

/// Checks the anchor, then each other record, then id uniqueness across the batch.
fn validate_batch<'a>(
    anchor: (&str, Result<(), MatchError>),
    others: impl IntoIterator<Item = (&'a str, Result<(), MatchError>)>,
) -> Result<(), AppError> {
    let (anchor_id, anchor_result) = anchor;
    anchor_result.map_err(|e| rejected(anchor_id, e))?;

    let mut ids = Vec::new();
    for (record_id, result) in others {
        result.map_err(|e| rejected(record_id, e))?;
        ids.push(record_id);
    }
    ensure_unique_ids(ids).map_err(|e| rejected("batch", e))?;
    Ok(())
}

/// Logs the record id and reason code only; the message with the offending
/// value goes back to the caller, not to the log.
fn rejected(record_id: &str, err: MatchError) -> AppError {
    warn!(record_id, reason = err.kind(), "Rejected match request");
    AppError::Match(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_keeps_full_error_for_response() {
        let err = MatchError::MalformedLocation {
            location: "Springfield".to_string(),
        };
        match rejected("c1", err.clone()) {
            AppError::Match(inner) => assert_eq!(inner, err),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_batch_reports_first_bad_record() {
        let result = validate_batch(
            ("anchor", Ok(())),
            vec![
                ("ok", Ok(())),
                ("bad", Err(MatchError::EmptyId { kind: "Job" })),
            ],
        );
        assert!(matches!(
            result,
            Err(AppError::Match(MatchError::EmptyId { kind: "Job" }))
        ));
    }

    #[test]
    fn test_validate_batch_rejects_duplicate_ids() {
        let result = validate_batch(("anchor", Ok(())), vec![("j1", Ok(())), ("j1", Ok(()))]);
        assert!(matches!(
            result,
            Err(AppError::Match(MatchError::DuplicateId { .. }))
        ));
    }

    #[test]
    fn test_validate_batch_anchor_checked_first() {
        let result = validate_batch(
            ("anchor", Err(MatchError::EmptyId { kind: "Candidate" })),
            Vec::<(&str, Result<(), MatchError>)>::new(),
        );
        assert!(matches!(
            result,
            Err(AppError::Match(MatchError::EmptyId { kind: "Candidate" }))
        ));
    }
}
