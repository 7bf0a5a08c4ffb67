//! Personality similarity between a job's target traits and a candidate's.

use serde::{Deserialize, Serialize};

use super::traits::{parse_traits, resolve_candidate_traits, TraitMap, TraitSource, BIG_FIVE};
use super::NEUTRAL_SCORE;
use crate::models::{CandidateProfile, JobRequirement};

/// Dimension count behind the distance normalizer. Fixed at the Big Five
/// regardless of how many traits a job lists.
const NORMALIZED_DIMENSIONS: f64 = BIG_FIVE.len() as f64;

/// Value assumed for a required trait the candidate has no score for.
const MISSING_TRAIT_VALUE: f64 = 0.5;

/// Whether similarity is clamped into [0,1].
///
/// With more than five required traits the distance can exceed
/// `max_trait_distance()` and the unclamped similarity goes negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalityBound {
    #[default]
    Unclamped,
    Clamped,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PersonalityScore {
    pub score: f64,
    pub source: TraitSource,
}

pub fn score_personality(
    candidate: &CandidateProfile,
    job: &JobRequirement,
    bound: PersonalityBound,
) -> PersonalityScore {
    let neutral = |source| PersonalityScore {
        score: NEUTRAL_SCORE,
        source,
    };

    let Some(required) = job
        .required_personality_traits
        .as_deref()
        .and_then(parse_traits)
    else {
        return neutral(TraitSource::None);
    };

    let (source, candidate_traits) = resolve_candidate_traits(candidate);
    if required.is_empty() || candidate_traits.is_empty() {
        return neutral(source);
    }

    let score = similarity(&required, &candidate_traits, bound);
    PersonalityScore { score, source }
}

/// Euclidean distance over the required traits only. Traits the candidate
/// lacks are read as `MISSING_TRAIT_VALUE`; candidate-only traits are ignored.
pub fn trait_distance(required: &TraitMap, candidate: &TraitMap) -> f64 {
    required
        .iter()
        .map(|(name, target)| {
            let actual = candidate.get(name).copied().unwrap_or(MISSING_TRAIT_VALUE);
            (target - actual).powi(2)
        })
        .sum::<f64>()
        .sqrt()
}

/// Largest possible distance over five dimensions in [0,1]: sqrt(5).
pub fn max_trait_distance() -> f64 {
    NORMALIZED_DIMENSIONS.sqrt()
}

pub fn similarity(required: &TraitMap, candidate: &TraitMap, bound: PersonalityBound) -> f64 {
    let raw = 1.0 - trait_distance(required, candidate) / max_trait_distance();
    match bound {
        PersonalityBound::Unclamped => raw,
        PersonalityBound::Clamped => raw.clamp(0.0, 1.0),
    }
}
