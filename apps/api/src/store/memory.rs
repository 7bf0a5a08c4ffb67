use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use super::RecordStore;
use crate::errors::AppError;
use crate::models::{CandidateProfile, JobRequirement};

/// Immutable in-process store, seeded once from a JSON document of the form
/// `{"candidates": [...], "jobs": [...]}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemoryRecordStore {
    #[serde(default)]
    candidates: Vec<CandidateProfile>,
    #[serde(default)]
    jobs: Vec<JobRequirement>,
}

impl MemoryRecordStore {
    pub fn new(mut candidates: Vec<CandidateProfile>, mut jobs: Vec<JobRequirement>) -> Self {
        candidates.sort_by_key(|c| c.id);
        jobs.sort_by_key(|j| j.id);
        Self { candidates, jobs }
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let parsed: MemoryRecordStore =
            serde_json::from_str(raw).context("records file is not a valid records document")?;
        Ok(Self::new(parsed.candidates, parsed.jobs))
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read records file '{}'", path.display()))?;
        let store = Self::from_json(&raw)?;
        info!(
            "Loaded {} candidates and {} jobs from {}",
            store.candidates.len(),
            store.jobs.len(),
            path.display()
        );
        Ok(store)
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn list_candidates(&self) -> Result<Vec<CandidateProfile>, AppError> {
        Ok(self.candidates.clone())
    }

    async fn get_candidate(&self, id: i32) -> Result<Option<CandidateProfile>, AppError> {
        Ok(self.candidates.iter().find(|c| c.id == id).cloned())
    }

    async fn list_jobs(&self) -> Result<Vec<JobRequirement>, AppError> {
        Ok(self.jobs.clone())
    }

    async fn get_job(&self, id: i32) -> Result<Option<JobRequirement>, AppError> {
        Ok(self.jobs.iter().find(|j| j.id == id).cloned())
    }
}
