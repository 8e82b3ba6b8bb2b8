//! Explanation synthesis — turns the four criterion scores into one sentence.
//!
//! Works from scores alone; it never sees the raw profile or requirement.

use crate::matching::models::SubScores;

const STRONG_THRESHOLD: f64 = 0.7;
const REMOTE_THRESHOLD: f64 = 0.5;

const PREFIX: &str = "This job was recommended because ";
const FALLBACK: &str = "it meets general suitability criteria";
const JOINER: &str = ", and ";

const SKILLS_CLAUSE: &str = "you have strong skills matching the job requirements";
const EXPERIENCE_CLAUSE: &str = "your experience aligns well with the job expectations";
const EDUCATION_CLAUSE: &str = "your education meets the required qualifications";
const LOCATION_CLAUSE: &str = "your location is a good match for this job";
const REMOTE_CLAUSE: &str = "remote work is an option for this job";

pub fn explain(scores: &SubScores) -> String {
    let reasons = reasons(scores);
    let body = if reasons.is_empty() {
        FALLBACK.to_string()
    } else {
        reasons.join(JOINER)
    };
    format!("{PREFIX}{body}.")
}

/// Qualifying clauses in fixed order: skills, experience, education, location.
fn reasons(scores: &SubScores) -> Vec<&'static str> {
    let mut reasons = Vec::with_capacity(4);

    if scores.skills > STRONG_THRESHOLD {
        reasons.push(SKILLS_CLAUSE);
    }
    if scores.experience > STRONG_THRESHOLD {
        reasons.push(EXPERIENCE_CLAUSE);
    }
    if scores.education > STRONG_THRESHOLD {
        reasons.push(EDUCATION_CLAUSE);
    }
    if scores.location > STRONG_THRESHOLD {
        reasons.push(LOCATION_CLAUSE);
    } else if scores.location > REMOTE_THRESHOLD {
        reasons.push(REMOTE_CLAUSE);
    }

    reasons
}
