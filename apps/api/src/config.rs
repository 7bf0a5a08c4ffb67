use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::ranking::{PersonalityBound, RankingWeights};

/// Where candidate and job records are read from.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordSource {
    Postgres {
        database_url: String,
        max_connections: u32,
    },
    File(PathBuf),
}

/// Application configuration loaded from environment variables.
/// Startup fails if neither `DATABASE_URL` nor `RECORDS_PATH` is set, or if
/// the ranking weights are invalid.
#[derive(Debug, Clone)]
pub struct Config {
    pub records: RecordSource,
    pub port: u16,
    pub rust_log: String,
    pub weights: RankingWeights,
    pub personality_bound: PersonalityBound,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let records = match (lookup("DATABASE_URL"), lookup("RECORDS_PATH")) {
            (Some(database_url), _) => RecordSource::Postgres {
                database_url,
                max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?,
            },
            (None, Some(path)) => RecordSource::File(PathBuf::from(path)),
            (None, None) => bail!("Either DATABASE_URL or RECORDS_PATH must be set"),
        };

        let defaults = RankingWeights::default();
        let weights = RankingWeights {
            skills: parse_or(&lookup, "RANK_WEIGHT_SKILLS", defaults.skills)?,
            experience: parse_or(&lookup, "RANK_WEIGHT_EXPERIENCE", defaults.experience)?,
            education: parse_or(&lookup, "RANK_WEIGHT_EDUCATION", defaults.education)?,
            certifications: parse_or(
                &lookup,
                "RANK_WEIGHT_CERTIFICATIONS",
                defaults.certifications,
            )?,
            personality: parse_or(&lookup, "RANK_WEIGHT_PERSONALITY", defaults.personality)?,
        };
        weights.validate().context("invalid ranking weights")?;

        let personality_bound = if parse_or(&lookup, "RANK_CLAMP_PERSONALITY", false)? {
            PersonalityBound::Clamped
        } else {
            PersonalityBound::Unclamped
        };

        Ok(Config {
            records,
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            weights,
            personality_bound,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}
