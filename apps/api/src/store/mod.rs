//! Read-only query interface over candidate and job records.
//!
//! `AppState` holds an `Arc<dyn RecordStore>`, chosen at startup from config.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::{CandidateProfile, JobRequirement};

pub use memory::MemoryRecordStore;
pub use postgres::PgRecordStore;

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All candidates, ordered by id.
    async fn list_candidates(&self) -> Result<Vec<CandidateProfile>, AppError>;

    async fn get_candidate(&self, id: i32) -> Result<Option<CandidateProfile>, AppError>;

    /// All jobs, ordered by id.
    async fn list_jobs(&self) -> Result<Vec<JobRequirement>, AppError>;

    async fn get_job(&self, id: i32) -> Result<Option<JobRequirement>, AppError>;
}
