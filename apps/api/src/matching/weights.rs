use serde::{Deserialize, Serialize};

use crate::matching::error::MatchError;
use crate::matching::models::SubScores;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Cent values are snapped to this grid before rounding, so float noise on a
/// decimal half (0.285 stored as 0.28499999…) cannot decide its direction.
const CENT_SNAP: f64 = 1e6;

/// Relative importance of each criterion in the aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriterionWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub location: f64,
}

/// Skills 40%, experience 30%, education 20%, location 10%.
pub const DEFAULT_WEIGHTS: CriterionWeights = CriterionWeights {
    skills: 0.4,
    experience: 0.3,
    education: 0.2,
    location: 0.1,
};

impl Default for CriterionWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl CriterionWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.education + self.location
    }

    /// Checked once at start-up; `aggregate` trusts the weights afterwards.
    pub fn validate(&self) -> Result<(), MatchError> {
        let sum = self.sum();
        let any_negative = [self.skills, self.experience, self.education, self.location]
            .iter()
            .any(|w| *w < 0.0);
        if any_negative || !sum.is_finite() || (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(MatchError::InvalidWeights { sum });
        }
        Ok(())
    }

    /// Weighted sum of the criterion scores, rounded to two decimals.
    pub fn aggregate(&self, scores: &SubScores) -> f64 {
        round_score(
            self.skills * scores.skills
                + self.experience * scores.experience
                + self.education * scores.education
                + self.location * scores.location,
        )
    }
}

/// Rounds to two decimals, decimal halves away from zero (round-half-up for scores).
pub fn round_score(value: f64) -> f64 {
    let cents = ((value * 100.0) * CENT_SNAP).round() / CENT_SNAP;
    cents.round() / 100.0
}
