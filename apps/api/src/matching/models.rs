#![allow(dead_code)]

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::matching::criteria::parse_location;
use crate::matching::error::MatchError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    #[serde(default)]
    pub major: String,
}

impl Education {
    pub fn new(degree: impl Into<String>, major: impl Into<String>) -> Self {
        Self {
            degree: degree.into(),
            major: major.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: String,
    pub skills: BTreeSet<String>,
    #[serde(alias = "experience")]
    pub experience_years: f64,
    #[serde(default)]
    pub education: Vec<Education>,
    /// "City, Country"
    pub location: String,
    #[serde(default)]
    pub remote_ok: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequirement {
    pub id: String,
    #[serde(default)]
    pub required_skills: BTreeSet<String>,
    /// 0 means no minimum.
    #[serde(alias = "min_experience", default)]
    pub min_experience_years: f64,
    pub required_education: Education,
    pub locations: Vec<String>,
    #[serde(default)]
    pub remote_available: bool,
}

/// One row of a ranked result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub other_id: String,
    pub score: f64, // 0.00 – 1.00, two decimals
    pub explanation: String,
}

/// The four criterion scores for one job/candidate pair, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SubScores {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub location: f64,
}

impl SubScores {
    pub fn new(skills: f64, experience: f64, education: f64, location: f64) -> Self {
        Self {
            skills,
            experience,
            education,
            location,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Boundary validation
// ────────────────────────────────────────────────────────────────────────────

impl CandidateProfile {
    /// Shape checks the request boundary runs before handing a record to the engine.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.id.trim().is_empty() {
            return Err(MatchError::EmptyId { kind: "Candidate" });
        }
        check_years("experience_years", self.experience_years)?;
        parse_location(&self.location)?;
        Ok(())
    }
}

impl JobRequirement {
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.id.trim().is_empty() {
            return Err(MatchError::EmptyId { kind: "Job" });
        }
        check_years("min_experience_years", self.min_experience_years)?;
        for location in &self.locations {
            parse_location(location)?;
        }
        Ok(())
    }
}

pub(crate) fn check_years(field: &'static str, value: f64) -> Result<f64, MatchError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(MatchError::NegativeYears { field, value })
    }
}

/// Rejects a batch in which two records share an id.
pub fn ensure_unique_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Result<(), MatchError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(MatchError::DuplicateId { id: id.to_string() });
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn candidate(
        id: &str,
        skills: &[&str],
        years: f64,
        degrees: &[&str],
        location: &str,
        remote_ok: bool,
    ) -> CandidateProfile {
        CandidateProfile {
            id: id.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience_years: years,
            education: degrees
                .iter()
                .map(|d| Education::new(*d, "Computer Science"))
                .collect(),
            location: location.to_string(),
            remote_ok,
        }
    }

    pub fn job(
        id: &str,
        skills: &[&str],
        years: f64,
        degree: &str,
        locations: &[&str],
        remote_available: bool,
    ) -> JobRequirement {
        JobRequirement {
            id: id.to_string(),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            min_experience_years: years,
            required_education: Education::new(degree, "Computer Science"),
            locations: locations.iter().map(|l| l.to_string()).collect(),
            remote_available,
        }
    }
}
