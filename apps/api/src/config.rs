use anyhow::{anyhow, Context, Result};

use crate::matching::criteria::DEFAULT_EDUCATION_TOLERANCE;
use crate::matching::{RemoteRule, ScoringPolicy};

/// Application configuration loaded from environment variables.
/// Every variable is optional; a present but unparsable value fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub scoring_policy: ScoringPolicy,
    pub remote_rule: RemoteRule,
    pub education_tolerance: u8,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            scoring_policy: parse_optional("MATCH_SCORING_POLICY")?.unwrap_or_default(),
            remote_rule: parse_optional("MATCH_REMOTE_RULE")?.unwrap_or_default(),
            education_tolerance: std::env::var("MATCH_EDUCATION_TOLERANCE")
                .ok()
                .map(|v| v.trim().parse::<u8>())
                .transpose()
                .context("MATCH_EDUCATION_TOLERANCE must be a small non-negative integer")?
                .unwrap_or(DEFAULT_EDUCATION_TOLERANCE),
        })
    }
}

fn parse_optional<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr<Err = String>,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow!("Invalid value for '{key}': {e}")),
        Err(_) => Ok(None),
    }
}
