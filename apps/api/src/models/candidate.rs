use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A candidate as materialized by the record store.
///
/// Trait columns hold serialized JSON mappings; they are decoded lazily by
/// `ranking::traits::parse_traits` so a malformed value never fails a load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CandidateProfile {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub certifications: Option<String>,
    #[serde(default)]
    pub interests: Option<String>,
    /// Derived from résumé text analysis.
    #[serde(default)]
    pub personality_traits: Option<String>,
    /// Derived from the questionnaire. Preferred over `personality_traits`.
    #[serde(default)]
    pub test_personality_traits: Option<String>,
    #[serde(default)]
    pub cv_filename: Option<String>,
}
