//! Match Scoring — pluggable, trait-based scorer that measures a candidate against a job.
//!
//! Default: `ProfileScorer` (list-based education with level tolerance, vacuous
//! skill match). Alternate: `LegacyScorer`, the older flat variant kept behind
//! `MATCH_SCORING_POLICY=legacy`.
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`, chosen at startup via config.

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::matching::criteria::{
    score_education, score_education_with_tolerance, score_experience, score_location, score_skills,
    DEFAULT_EDUCATION_TOLERANCE,
};
use crate::matching::error::MatchError;
use crate::matching::models::{CandidateProfile, Education, JobRequirement, SubScores};
use crate::matching::weights::{CriterionWeights, DEFAULT_WEIGHTS};

// ────────────────────────────────────────────────────────────────────────────
// Policy knobs
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    #[default]
    Profile,
    Legacy,
}

impl FromStr for ScoringPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "profile" => Ok(ScoringPolicy::Profile),
            "legacy" => Ok(ScoringPolicy::Legacy),
            other => Err(format!("unknown scoring policy '{other}' (expected profile|legacy)")),
        }
    }
}

/// How the job's and the candidate's remote preferences combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteRule {
    /// Either side accepting remote is enough.
    #[default]
    Either,
    /// Both sides must accept remote.
    Both,
}

impl RemoteRule {
    pub fn allows(self, job_remote: bool, candidate_remote: bool) -> bool {
        match self {
            RemoteRule::Either => job_remote || candidate_remote,
            RemoteRule::Both => job_remote && candidate_remote,
        }
    }
}

impl FromStr for RemoteRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "either" | "or" => Ok(RemoteRule::Either),
            "both" | "and" => Ok(RemoteRule::Both),
            other => Err(format!("unknown remote rule '{other}' (expected either|both)")),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The match scorer trait. Implement this to swap scoring policies without
/// touching the ranker or the handlers.
///
/// Carried in `AppState` as `Arc<dyn MatchScorer>`.
pub trait MatchScorer: Send + Sync {
    /// Per-criterion scores for one pair.
    fn sub_scores(
        &self,
        job: &JobRequirement,
        candidate: &CandidateProfile,
    ) -> Result<SubScores, MatchError>;

    fn weights(&self) -> &CriterionWeights {
        &DEFAULT_WEIGHTS
    }

    /// "profile" | "legacy", for logs and responses.
    fn policy_name(&self) -> &'static str;
}

pub fn build_scorer(
    policy: ScoringPolicy,
    remote_rule: RemoteRule,
    education_tolerance: u8,
) -> Arc<dyn MatchScorer> {
    match policy {
        ScoringPolicy::Profile => Arc::new(ProfileScorer {
            remote_rule,
            education_tolerance,
        }),
        ScoringPolicy::Legacy => Arc::new(LegacyScorer { remote_rule }),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// ProfileScorer — canonical policy
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct ProfileScorer {
    pub remote_rule: RemoteRule,
    pub education_tolerance: u8,
}

impl Default for ProfileScorer {
    fn default() -> Self {
        Self {
            remote_rule: RemoteRule::default(),
            education_tolerance: DEFAULT_EDUCATION_TOLERANCE,
        }
    }
}

impl ProfileScorer {
    fn education(&self, required: &Education, candidate: &[Education]) -> f64 {
        if self.education_tolerance == DEFAULT_EDUCATION_TOLERANCE {
            score_education(required, candidate)
        } else {
            score_education_with_tolerance(required, candidate, self.education_tolerance)
        }
    }
}

impl MatchScorer for ProfileScorer {
    fn sub_scores(
        &self,
        job: &JobRequirement,
        candidate: &CandidateProfile,
    ) -> Result<SubScores, MatchError> {
        Ok(SubScores {
            skills: score_skills(&job.required_skills, &candidate.skills),
            experience: score_experience(job.min_experience_years, candidate.experience_years)?,
            education: self.education(&job.required_education, &candidate.education),
            location: score_location(
                &job.locations,
                &candidate.location,
                self.remote_rule
                    .allows(job.remote_available, candidate.remote_ok),
            )?,
        })
    }

    fn policy_name(&self) -> &'static str {
        "profile"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LegacyScorer — flat variant
// ────────────────────────────────────────────────────────────────────────────

/// Older policy: no skill requirement means no signal (0.0), and education
/// counts only when some entry names exactly the required degree.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyScorer {
    pub remote_rule: RemoteRule,
}

impl MatchScorer for LegacyScorer {
    fn sub_scores(
        &self,
        job: &JobRequirement,
        candidate: &CandidateProfile,
    ) -> Result<SubScores, MatchError> {
        let skills = if job.required_skills.is_empty() {
            0.0
        } else {
            score_skills(&job.required_skills, &candidate.skills)
        };

        Ok(SubScores {
            skills,
            experience: score_experience(job.min_experience_years, candidate.experience_years)?,
            education: exact_degree_match(&job.required_education, &candidate.education),
            location: score_location(
                &job.locations,
                &candidate.location,
                self.remote_rule
                    .allows(job.remote_available, candidate.remote_ok),
            )?,
        })
    }

    fn policy_name(&self) -> &'static str {
        "legacy"
    }
}

fn exact_degree_match(required: &Education, candidate: &[Education]) -> f64 {
    if candidate.iter().any(|e| e.degree == required.degree) {
        1.0
    } else {
        0.0
    }
}
