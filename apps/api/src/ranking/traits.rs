//! Personality trait mappings and the candidate trait-source policy.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::models::CandidateProfile;

/// Trait name → score. Ordered so distance sums are reproducible.
pub type TraitMap = BTreeMap<String, f64>;

/// The Big Five dimensions the distance normalization assumes.
pub const BIG_FIVE: [&str; 5] = [
    "openness",
    "conscientiousness",
    "extraversion",
    "agreeableness",
    "neuroticism",
];

/// Which candidate field supplied the personality vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitSource {
    Questionnaire,
    ResumeText,
    None,
}

/// Decodes a serialized trait mapping.
///
/// Returns `None` for blank input, invalid JSON, or JSON that is not an
/// object of numbers. `null` is treated as absent.
pub fn parse_traits(serialized: &str) -> Option<TraitMap> {
    if serialized.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<Option<TraitMap>>(serialized) {
        Ok(traits) => traits,
        Err(e) => {
            debug!(error = %e, "ignoring malformed trait mapping");
            None
        }
    }
}

/// Resolves the candidate's trait vector.
///
/// The questionnaire result wins whenever it is present. A present but
/// malformed source yields an empty mapping; the other source is not retried.
pub fn resolve_candidate_traits(candidate: &CandidateProfile) -> (TraitSource, TraitMap) {
    let chosen = [
        (TraitSource::Questionnaire, &candidate.test_personality_traits),
        (TraitSource::ResumeText, &candidate.personality_traits),
    ]
    .into_iter()
    .find_map(|(source, raw)| {
        raw.as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| (source, s))
    });

    match chosen {
        Some((source, raw)) => (source, parse_traits(raw).unwrap_or_default()),
        None => (TraitSource::None, TraitMap::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(test: Option<&str>, resume: Option<&str>) -> CandidateProfile {
        CandidateProfile {
            test_personality_traits: test.map(str::to_string),
            personality_traits: resume.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_valid_mapping() {
        let traits = parse_traits(r#"{"openness": 0.8, "neuroticism": 0.1}"#).unwrap();
        assert_eq!(traits.len(), 2);
        assert_eq!(traits["openness"], 0.8);
    }

    #[test]
    fn test_parse_integer_values() {
        let traits = parse_traits(r#"{"openness": 1}"#).unwrap();
        assert_eq!(traits["openness"], 1.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_traits("not json").is_none());
        assert!(parse_traits("[0.1, 0.2]").is_none());
        assert!(parse_traits(r#"{"openness": "high"}"#).is_none());
        assert!(parse_traits("   ").is_none());
        assert!(parse_traits("null").is_none());
    }

    #[test]
    fn test_parse_empty_object_is_some_empty() {
        assert_eq!(parse_traits("{}"), Some(TraitMap::new()));
    }

    #[test]
    fn test_questionnaire_preferred() {
        let c = candidate(Some(r#"{"openness": 0.8}"#), Some(r#"{"openness": 0.2}"#));
        let (source, traits) = resolve_candidate_traits(&c);
        assert_eq!(source, TraitSource::Questionnaire);
        assert_eq!(traits["openness"], 0.8);
    }

    #[test]
    fn test_falls_back_to_resume_when_questionnaire_absent() {
        let c = candidate(None, Some(r#"{"openness": 0.2}"#));
        let (source, traits) = resolve_candidate_traits(&c);
        assert_eq!(source, TraitSource::ResumeText);
        assert_eq!(traits["openness"], 0.2);
    }

    #[test]
    fn test_empty_questionnaire_string_counts_as_absent() {
        let c = candidate(Some(""), Some(r#"{"openness": 0.2}"#));
        assert_eq!(resolve_candidate_traits(&c).0, TraitSource::ResumeText);
    }

    #[test]
    fn test_malformed_questionnaire_does_not_retry_resume() {
        let c = candidate(Some("{broken"), Some(r#"{"openness": 0.2}"#));
        let (source, traits) = resolve_candidate_traits(&c);
        assert_eq!(source, TraitSource::Questionnaire);
        assert!(traits.is_empty());
    }

    #[test]
    fn test_no_sources() {
        let (source, traits) = resolve_candidate_traits(&candidate(None, None));
        assert_eq!(source, TraitSource::None);
        assert!(traits.is_empty());
    }
}
