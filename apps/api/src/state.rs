use std::sync::Arc;

use crate::ranking::RankingEngine;
use crate::store::RecordStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable record source. Postgres when `DATABASE_URL` is set, otherwise
    /// an in-memory store seeded from `RECORDS_PATH`.
    pub store: Arc<dyn RecordStore>,
    pub engine: RankingEngine,
}
