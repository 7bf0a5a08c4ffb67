//! Combines the five factor scores into one composite and orders candidates.

use serde::Serialize;
use tracing::debug;

use super::keywords::{keyword_presence_score, list_containment_score};
use super::personality::{score_personality, PersonalityBound};
use super::traits::TraitSource;
use super::weights::RankingWeights;
use crate::models::{CandidateProfile, JobRequirement};

/// Per-factor match scores for one candidate against one job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FactorScores {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub certifications: f64,
    pub personality: f64,
}

impl FactorScores {
    pub fn combine(&self, weights: &RankingWeights) -> f64 {
        self.skills * weights.skills
            + self.experience * weights.experience
            + self.education * weights.education
            + self.certifications * weights.certifications
            + self.personality * weights.personality
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub score: f64,
    pub factors: FactorScores,
    pub trait_source: TraitSource,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate<'a> {
    pub candidate: &'a CandidateProfile,
    pub score: f64,
    pub factors: FactorScores,
    pub trait_source: TraitSource,
}

/// Stateless scorer. Cheap to copy and safe to share across requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankingEngine {
    weights: RankingWeights,
    personality_bound: PersonalityBound,
}

impl RankingEngine {
    pub fn new(weights: RankingWeights, personality_bound: PersonalityBound) -> Self {
        Self {
            weights,
            personality_bound,
        }
    }

    pub fn weights(&self) -> &RankingWeights {
        &self.weights
    }

    pub fn personality_bound(&self) -> PersonalityBound {
        self.personality_bound
    }

    pub fn score(&self, candidate: &CandidateProfile, job: &JobRequirement) -> ScoreBreakdown {
        let personality = score_personality(candidate, job, self.personality_bound);

        let factors = FactorScores {
            skills: list_containment_score(
                job.required_skills.as_deref(),
                candidate.skills.as_deref(),
            ),
            experience: keyword_presence_score(
                job.required_experience.as_deref(),
                candidate.experience.as_deref(),
            ),
            education: keyword_presence_score(
                job.required_education.as_deref(),
                candidate.education.as_deref(),
            ),
            certifications: list_containment_score(
                job.required_certifications.as_deref(),
                candidate.certifications.as_deref(),
            ),
            personality: personality.score,
        };

        ScoreBreakdown {
            score: factors.combine(&self.weights),
            factors,
            trait_source: personality.source,
        }
    }

    /// Scores every candidate and sorts by descending composite score.
    ///
    /// The sort is stable: equal scores keep their input order.
    pub fn rank<'a>(
        &self,
        candidates: &'a [CandidateProfile],
        job: &JobRequirement,
    ) -> Vec<RankedCandidate<'a>> {
        debug!(job_id = job.id, candidates = candidates.len(), "ranking candidates");

        let mut ranked: Vec<RankedCandidate<'a>> = candidates
            .iter()
            .map(|candidate| {
                let breakdown = self.score(candidate, job);
                RankedCandidate {
                    candidate,
                    score: breakdown.score,
                    factors: breakdown.factors,
                    trait_source: breakdown.trait_source,
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }
}
