//! Axum route handlers for the Ranking API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::{CandidateProfile, JobRequirement};
use crate::ranking::traits::{parse_traits, TraitMap, TraitSource};
use crate::ranking::{FactorScores, RankedCandidate, NEUTRAL_SCORE};
use crate::state::AppState;

/// Upper bound on candidates accepted inline by `POST /api/v1/rankings`.
pub const MAX_INLINE_CANDIDATES: usize = 10_000;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CandidatesQuery {
    pub job_id: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub job: JobRequirement,
    #[serde(default)]
    pub candidates: Vec<CandidateProfile>,
}

/// Candidate as returned to clients: trait columns decoded, malformed or
/// absent mappings shown as `{}`.
#[derive(Debug, Serialize)]
pub struct CandidateView {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub certifications: Option<String>,
    pub interests: Option<String>,
    pub personality_traits: TraitMap,
    pub test_personality_traits: TraitMap,
    pub cv_filename: Option<String>,
}

impl From<&CandidateProfile> for CandidateView {
    fn from(c: &CandidateProfile) -> Self {
        let decode = |raw: &Option<String>| {
            raw.as_deref()
                .and_then(parse_traits)
                .unwrap_or_default()
        };
        CandidateView {
            id: c.id,
            name: c.name.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
            skills: c.skills.clone(),
            experience: c.experience.clone(),
            education: c.education.clone(),
            certifications: c.certifications.clone(),
            interests: c.interests.clone(),
            personality_traits: decode(&c.personality_traits),
            test_personality_traits: decode(&c.test_personality_traits),
            cv_filename: c.cv_filename.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RankedCandidateView {
    #[serde(flatten)]
    pub candidate: CandidateView,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factors: Option<FactorScores>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trait_source: Option<TraitSource>,
}

impl From<&RankedCandidate<'_>> for RankedCandidateView {
    fn from(r: &RankedCandidate<'_>) -> Self {
        RankedCandidateView {
            candidate: r.candidate.into(),
            score: r.score,
            factors: Some(r.factors),
            trait_source: Some(r.trait_source),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RankingResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<i32>,
    pub candidates: Vec<RankedCandidateView>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobRequirement>>, AppError> {
    Ok(Json(state.store.list_jobs().await?))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(job_id): Path<i32>,
) -> Result<Json<JobRequirement>, AppError> {
    Ok(Json(load_job(&state, job_id).await?))
}

/// GET /api/v1/jobs/:id/rankings
///
/// Ranks every stored candidate against the job, best match first.
pub async fn handle_job_rankings(
    State(state): State<AppState>,
    Path(job_id): Path<i32>,
) -> Result<Json<RankingResponse>, AppError> {
    let job = load_job(&state, job_id).await?;
    let candidates = state.store.list_candidates().await?;

    Ok(Json(rank_for_job(&state, &candidates, &job)))
}

/// GET /api/v1/candidates?job_id=N
///
/// With `job_id`, identical to the job rankings endpoint. Without it, lists
/// candidates in storage order at the neutral score.
pub async fn handle_list_candidates(
    State(state): State<AppState>,
    Query(params): Query<CandidatesQuery>,
) -> Result<Json<RankingResponse>, AppError> {
    let candidates = state.store.list_candidates().await?;

    let response = match params.job_id {
        Some(job_id) => {
            let job = load_job(&state, job_id).await?;
            rank_for_job(&state, &candidates, &job)
        }
        None => RankingResponse {
            job_id: None,
            candidates: candidates
                .iter()
                .map(|c| RankedCandidateView {
                    candidate: c.into(),
                    score: NEUTRAL_SCORE,
                    factors: None,
                    trait_source: None,
                })
                .collect(),
        },
    };

    Ok(Json(response))
}

/// GET /api/v1/candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(candidate_id): Path<i32>,
) -> Result<Json<CandidateView>, AppError> {
    let candidate = state
        .store
        .get_candidate(candidate_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Candidate {candidate_id} not found")))?;

    Ok(Json(CandidateView::from(&candidate)))
}

/// POST /api/v1/rankings
///
/// Ranks caller-supplied records without touching the store.
pub async fn handle_rank_records(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankingResponse>, AppError> {
    if request.candidates.len() > MAX_INLINE_CANDIDATES {
        return Err(AppError::Validation(format!(
            "at most {MAX_INLINE_CANDIDATES} candidates may be ranked per request, got {}",
            request.candidates.len()
        )));
    }

    Ok(Json(rank_for_job(&state, &request.candidates, &request.job)))
}

async fn load_job(state: &AppState, job_id: i32) -> Result<JobRequirement, AppError> {
    state
        .store
        .get_job(job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))
}

fn rank_for_job(
    state: &AppState,
    candidates: &[CandidateProfile],
    job: &JobRequirement,
) -> RankingResponse {
    let ranked = state.engine.rank(candidates, job);

    if let Some(top) = ranked.first() {
        info!(
            job_id = job.id,
            candidates = ranked.len(),
            top_candidate = top.candidate.id,
            top_score = top.score,
            "ranked candidates"
        );
    }

    RankingResponse {
        job_id: Some(job.id),
        candidates: ranked.iter().map(RankedCandidateView::from).collect(),
    }
}
