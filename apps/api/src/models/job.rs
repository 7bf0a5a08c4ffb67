use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct JobRequirement {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Comma-delimited.
    #[serde(default)]
    pub required_skills: Option<String>,
    /// Space-delimited keywords.
    #[serde(default)]
    pub required_experience: Option<String>,
    /// Space-delimited keywords.
    #[serde(default)]
    pub required_education: Option<String>,
    /// Comma-delimited.
    #[serde(default)]
    pub required_certifications: Option<String>,
    /// Serialized trait mapping, e.g. `{"openness": 0.8}`.
    #[serde(default)]
    pub required_personality_traits: Option<String>,
}
