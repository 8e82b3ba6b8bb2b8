//! Criterion scorers — four independent pure functions, each returning a score in [0, 1].
//!
//! Scorers that can observe a malformed value (negative years, a location without
//! the `", "` separator) return `MatchError` instead of degrading silently.

use std::collections::BTreeSet;

use crate::matching::error::MatchError;
use crate::matching::models::{check_years, Education};

/// Ordinal level per recognised degree. Anything not listed ranks 0.
pub const DEGREE_LEVELS: &[(&str, i32)] = &[
    ("PhD", 4),
    ("Master", 3),
    ("Bachelor", 2),
    ("High School", 1),
    ("None", 0),
];

/// Levels below the requirement that still earn partial education credit.
pub const DEFAULT_EDUCATION_TOLERANCE: u8 = 1;

const PARTIAL_EDUCATION_SCORE: f64 = 0.5;

const EXACT_LOCATION_SCORE: f64 = 1.0;
const SAME_COUNTRY_SCORE: f64 = 0.8;
const REMOTE_SCORE: f64 = 0.5;

pub fn degree_level(degree: &str) -> i32 {
    DEGREE_LEVELS
        .iter()
        .find(|(name, _)| *name == degree)
        .map(|(_, level)| *level)
        .unwrap_or(0)
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// Share of required skills the candidate holds.
///
/// An empty requirement is a vacuous full match (1.0): a job that lists no
/// skills does not penalise anyone.
pub fn score_skills(required: &BTreeSet<String>, candidate: &BTreeSet<String>) -> f64 {
    if required.is_empty() {
        return 1.0;
    }
    let matched = required.intersection(candidate).count();
    matched as f64 / required.len() as f64
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

/// `min(candidate / required, 1.0)`, or 1.0 when no minimum is imposed.
pub fn score_experience(required_years: f64, candidate_years: f64) -> Result<f64, MatchError> {
    let required_years = check_years("min_experience_years", required_years)?;
    let candidate_years = check_years("experience_years", candidate_years)?;

    if required_years == 0.0 {
        return Ok(1.0);
    }
    Ok((candidate_years / required_years).min(1.0))
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

/// Education score with the standard one-level tolerance.
pub fn score_education(required: &Education, candidate: &[Education]) -> f64 {
    score_education_with_tolerance(required, candidate, DEFAULT_EDUCATION_TOLERANCE)
}

/// Compares the candidate's highest degree level against the requirement.
///
/// - exactly the required level → 1.0
/// - any recognised degree within `tolerance` levels below, or above → 0.5
/// - otherwise, or no education entries at all → 0.0
pub fn score_education_with_tolerance(
    required: &Education,
    candidate: &[Education],
    tolerance: u8,
) -> f64 {
    let Some(best) = candidate.iter().map(|e| degree_level(&e.degree)).max() else {
        return 0.0;
    };
    let required_level = degree_level(&required.degree);

    if best == required_level {
        1.0
    } else if best > 0 && best >= required_level - i32::from(tolerance) {
        PARTIAL_EDUCATION_SCORE
    } else {
        0.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Location
// ────────────────────────────────────────────────────────────────────────────

/// A `"City, Country"` string split on its first `", "`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'a> {
    pub city: &'a str,
    pub country: &'a str,
}

pub fn parse_location(raw: &str) -> Result<Location<'_>, MatchError> {
    let malformed = || MatchError::MalformedLocation {
        location: raw.to_string(),
    };
    let (city, country) = raw.split_once(", ").ok_or_else(malformed)?;
    if city.trim().is_empty() || country.trim().is_empty() {
        return Err(malformed());
    }
    Ok(Location { city, country })
}

/// Rules, first hit wins: exact match 1.0, same country 0.8, remote allowed 0.5, else 0.0.
///
/// Every location is parsed before any rule runs, so a malformed acceptable
/// location fails the call even when an earlier entry would have matched.
pub fn score_location(
    acceptable: &[String],
    candidate_location: &str,
    remote_allowed: bool,
) -> Result<f64, MatchError> {
    let candidate = parse_location(candidate_location)?;
    let acceptable = acceptable
        .iter()
        .map(|l| parse_location(l))
        .collect::<Result<Vec<_>, _>>()?;

    if acceptable.iter().any(|l| *l == candidate) {
        return Ok(EXACT_LOCATION_SCORE);
    }
    if acceptable.iter().any(|l| l.country == candidate.country) {
        return Ok(SAME_COUNTRY_SCORE);
    }
    if remote_allowed {
        return Ok(REMOTE_SCORE);
    }
    Ok(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn edu(degree: &str) -> Education {
        Education::new(degree, "Computer Science")
    }

    fn locs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_skills_partial_overlap() {
        let score = score_skills(&set(&["Python", "ML"]), &set(&["Python", "Data Science"]));
        assert_eq!(score, 0.5);
    }

    #[test]
    fn test_skills_empty_requirement_is_full_match() {
        assert_eq!(score_skills(&set(&[]), &set(&[])), 1.0);
        assert_eq!(score_skills(&set(&[]), &set(&["Go"])), 1.0);
    }

    #[test]
    fn test_skills_subset_is_full_match() {
        let score = score_skills(&set(&["Rust", "SQL"]), &set(&["SQL", "Rust", "Kafka"]));
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_skills_order_independent() {
        let a = score_skills(&set(&["A", "B", "C"]), &set(&["C", "X"]));
        let b = score_skills(&set(&["C", "B", "A"]), &set(&["X", "C"]));
        assert_eq!(a, b);
        assert!((a - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_skills_case_sensitive() {
        assert_eq!(score_skills(&set(&["rust"]), &set(&["Rust"])), 0.0);
    }

    #[test]
    fn test_experience_no_minimum() {
        assert_eq!(score_experience(0.0, 0.0).unwrap(), 1.0);
        assert_eq!(score_experience(0.0, 12.0).unwrap(), 1.0);
    }

    #[test]
    fn test_experience_ratio_and_cap() {
        assert_eq!(score_experience(4.0, 4.0).unwrap(), 1.0);
        assert_eq!(score_experience(4.0, 2.0).unwrap(), 0.5);
        assert_eq!(score_experience(2.0, 10.0).unwrap(), 1.0);
        let s = score_experience(3.0, 2.5).unwrap();
        assert!((s - 0.8333).abs() < 1e-3, "Score was {s}");
    }

    #[test]
    fn test_experience_negative_rejected() {
        assert!(matches!(
            score_experience(-1.0, 2.0),
            Err(MatchError::NegativeYears { field: "min_experience_years", .. })
        ));
        assert!(matches!(
            score_experience(1.0, -0.5),
            Err(MatchError::NegativeYears { field: "experience_years", .. })
        ));
    }

    #[test]
    fn test_degree_levels() {
        assert_eq!(degree_level("PhD"), 4);
        assert_eq!(degree_level("High School"), 1);
        assert_eq!(degree_level("None"), 0);
        assert_eq!(degree_level("Bootcamp"), 0);
        assert_eq!(degree_level("master"), 0);
    }

    #[test]
    fn test_education_exact_level() {
        assert_eq!(score_education(&edu("Master"), &[edu("Master")]), 1.0);
    }

    #[test]
    fn test_education_one_level_under() {
        assert_eq!(score_education(&edu("Master"), &[edu("Bachelor")]), 0.5);
    }

    #[test]
    fn test_education_two_levels_under() {
        assert_eq!(score_education(&edu("PhD"), &[edu("Bachelor")]), 0.0);
    }

    #[test]
    fn test_education_overqualified_gets_partial() {
        assert_eq!(score_education(&edu("Bachelor"), &[edu("PhD")]), 0.5);
    }

    #[test]
    fn test_education_uses_best_entry() {
        let list = [edu("High School"), edu("Master"), edu("Bachelor")];
        assert_eq!(score_education(&edu("Master"), &list), 1.0);
    }

    #[test]
    fn test_education_empty_list_is_zero() {
        for degree in ["PhD", "Master", "Bachelor", "High School", "None", "Unknown"] {
            assert_eq!(score_education(&edu(degree), &[]), 0.0, "required {degree}");
        }
    }

    #[test]
    fn test_education_unrecognised_candidate_degree() {
        // Level 0 is never partial credit, but matches a level-0 requirement.
        assert_eq!(score_education(&edu("High School"), &[edu("Bootcamp")]), 0.0);
        assert_eq!(score_education(&edu("None"), &[edu("Bootcamp")]), 1.0);
    }

    #[test]
    fn test_education_tolerance_knob() {
        assert_eq!(
            score_education_with_tolerance(&edu("PhD"), &[edu("Bachelor")], 2),
            0.5
        );
        assert_eq!(
            score_education_with_tolerance(&edu("Master"), &[edu("Bachelor")], 0),
            0.0
        );
    }

    #[test]
    fn test_parse_location_splits_on_first_separator() {
        let l = parse_location("Washington, D.C., USA").unwrap();
        assert_eq!(l.city, "Washington");
        assert_eq!(l.country, "D.C., USA");
    }

    #[test]
    fn test_parse_location_rejects_malformed() {
        for raw in ["Berlin", "Berlin,Germany", ", Germany", "Berlin, ", ""] {
            assert!(
                matches!(parse_location(raw), Err(MatchError::MalformedLocation { .. })),
                "accepted {raw:?}"
            );
        }
    }

    #[test]
    fn test_location_exact_beats_remote() {
        let score = score_location(&locs(&["New York, USA"]), "New York, USA", true).unwrap();
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_location_same_country() {
        let score = score_location(&locs(&["New York, USA"]), "Los Angeles, USA", true).unwrap();
        assert_eq!(score, 0.8);
    }

    #[test]
    fn test_location_exact_match_in_later_entry() {
        let acceptable = locs(&["Austin, USA", "Toronto, Canada"]);
        assert_eq!(score_location(&acceptable, "Toronto, Canada", false).unwrap(), 1.0);
    }

    #[test]
    fn test_location_remote_fallback() {
        let acceptable = locs(&["London, UK"]);
        assert_eq!(score_location(&acceptable, "Lagos, Nigeria", true).unwrap(), 0.5);
        assert_eq!(score_location(&acceptable, "Lagos, Nigeria", false).unwrap(), 0.0);
    }

    #[test]
    fn test_location_no_acceptable_locations() {
        assert_eq!(score_location(&[], "Lagos, Nigeria", true).unwrap(), 0.5);
        assert_eq!(score_location(&[], "Lagos, Nigeria", false).unwrap(), 0.0);
    }

    #[test]
    fn test_location_malformed_candidate_rejected() {
        let err = score_location(&locs(&["London, UK"]), "London", true).unwrap_err();
        assert_eq!(
            err,
            MatchError::MalformedLocation {
                location: "London".to_string()
            }
        );
    }

    #[test]
    fn test_location_malformed_acceptable_rejected_even_after_exact_match() {
        let acceptable = locs(&["London, UK", "Anywhere"]);
        assert!(score_location(&acceptable, "London, UK", false).is_err());
    }
}
