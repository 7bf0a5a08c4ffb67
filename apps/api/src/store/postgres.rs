use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use super::RecordStore;
use crate::errors::AppError;
use crate::models::{CandidateProfile, JobRequirement};

const CANDIDATE_COLUMNS: &str = "id, name, email, phone, skills, experience, education, \
     certifications, interests, personality_traits, test_personality_traits, cv_filename";

const JOB_COLUMNS: &str = "id, title, description, required_skills, required_experience, \
     required_education, required_certifications, required_personality_traits";

/// Reads the `candidates` and `jobs` tables. Never writes.
#[derive(Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        info!("Connecting to PostgreSQL...");

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        info!("PostgreSQL connection pool established ({max_connections} connections)");
        Ok(Self { pool })
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn list_candidates(&self) -> Result<Vec<CandidateProfile>, AppError> {
        let rows = sqlx::query_as::<_, CandidateProfile>(&format!(
            "SELECT {CANDIDATE_COLUMNS} FROM candidates ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_candidate(&self, id: i32) -> Result<Option<CandidateProfile>, AppError> {
        let row = sqlx::query_as::<_, CandidateProfile>(&format!(
            "SELECT {CANDIDATE_COLUMNS} FROM candidates WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_jobs(&self) -> Result<Vec<JobRequirement>, AppError> {
        let rows = sqlx::query_as::<_, JobRequirement>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_job(&self, id: i32) -> Result<Option<JobRequirement>, AppError> {
        let row = sqlx::query_as::<_, JobRequirement>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}
