use thiserror::Error;

/// Rejections raised by the scoring engine.
///
/// Degenerate-but-valid input (empty skill sets, empty education lists, a zero
/// experience requirement) never produces one of these; it resolves to a score.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("Malformed location '{location}': expected \"City, Country\"")]
    MalformedLocation { location: String },

    #[error("Invalid {field}: {value} (must be a non-negative number)")]
    NegativeYears { field: &'static str, value: f64 },

    #[error("Criterion weights must be non-negative and sum to 1.0 (got {sum})")]
    InvalidWeights { sum: f64 },

    #[error("{kind} id cannot be empty")]
    EmptyId { kind: &'static str },

    #[error("Duplicate id '{id}' in batch")]
    DuplicateId { id: String },
}

impl MatchError {
    /// Stable reason code, safe to log without the offending value.
    pub fn kind(&self) -> &'static str {
        match self {
            MatchError::MalformedLocation { .. } => "malformed_location",
            MatchError::NegativeYears { .. } => "negative_years",
            MatchError::InvalidWeights { .. } => "invalid_weights",
            MatchError::EmptyId { .. } => "empty_id",
            MatchError::DuplicateId { .. } => "duplicate_id",
        }
    }
}
