//! Set-containment and keyword-presence scorers for the text factors.
//!
//! Skills and certifications are discrete items, compared by exact membership
//! after normalization. Experience and education are prose, so each required
//! keyword only has to appear somewhere in the candidate's narrative.

use super::NEUTRAL_SCORE;

/// Fraction of the comma-delimited `required` items present in `candidate`.
///
/// Items are trimmed and lowercased. Duplicates in `required` count twice.
pub fn list_containment_score(required: Option<&str>, candidate: Option<&str>) -> f64 {
    let (Some(required), Some(candidate)) = (non_blank(required), non_blank(candidate)) else {
        return NEUTRAL_SCORE;
    };

    let required_items = split_list(required);
    let candidate_items = split_list(candidate);

    let matched = required_items
        .iter()
        .filter(|item| candidate_items.contains(*item))
        .count();

    matched as f64 / required_items.len() as f64
}

/// Fraction of whitespace-delimited `required` keywords that occur as
/// substrings of the lowercased `narrative`.
pub fn keyword_presence_score(required: Option<&str>, narrative: Option<&str>) -> f64 {
    let (Some(required), Some(narrative)) = (non_blank(required), non_blank(narrative)) else {
        return NEUTRAL_SCORE;
    };

    let required = required.to_lowercase();
    let keywords: Vec<&str> = required.split_whitespace().collect();
    if keywords.is_empty() {
        return NEUTRAL_SCORE;
    }

    let narrative = narrative.to_lowercase();
    let matched = keywords.iter().filter(|kw| narrative.contains(**kw)).count();

    matched as f64 / keywords.len() as f64
}

fn non_blank(field: Option<&str>) -> Option<&str> {
    field.filter(|s| !s.trim().is_empty())
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|item| item.trim().to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_required_skills_present() {
        let score = list_containment_score(Some("Python, SQL"), Some("python, java, sql"));
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_partial_skill_match() {
        let score = list_containment_score(Some("Python, SQL, AWS"), Some("python"));
        assert!((score - 1.0 / 3.0).abs() < 1e-12, "Score was {score}");
    }

    #[test]
    fn test_no_skill_match_is_zero() {
        assert_eq!(list_containment_score(Some("Rust"), Some("go, java")), 0.0);
    }

    #[test]
    fn test_list_match_is_exact_not_substring() {
        // "java" must not match "javascript"
        assert_eq!(list_containment_score(Some("Java"), Some("JavaScript")), 0.0);
    }

    #[test]
    fn test_duplicate_requirements_inflate_denominator() {
        let score = list_containment_score(Some("rust, rust, go"), Some("rust"));
        assert!((score - 2.0 / 3.0).abs() < 1e-12, "Score was {score}");
    }

    #[test]
    fn test_list_neutral_when_either_side_missing() {
        assert_eq!(list_containment_score(None, Some("python")), NEUTRAL_SCORE);
        assert_eq!(list_containment_score(Some(""), Some("python")), NEUTRAL_SCORE);
        assert_eq!(list_containment_score(Some("python"), None), NEUTRAL_SCORE);
        assert_eq!(list_containment_score(Some("python"), Some("  ")), NEUTRAL_SCORE);
    }

    #[test]
    fn test_keyword_substring_match() {
        let score = keyword_presence_score(
            Some("Senior Backend"),
            Some("Worked as a senior engineer on backend services"),
        );
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_keyword_partial_match() {
        let score = keyword_presence_score(
            Some("bachelor computer science"),
            Some("Bachelor of Arts in History"),
        );
        assert!((score - 1.0 / 3.0).abs() < 1e-12, "Score was {score}");
    }

    #[test]
    fn test_keyword_matches_inside_words() {
        // substring semantics: "lead" is found in "leadership"
        assert_eq!(keyword_presence_score(Some("lead"), Some("Leadership roles")), 1.0);
    }

    #[test]
    fn test_keyword_neutral_when_either_side_missing() {
        assert_eq!(keyword_presence_score(None, Some("anything")), NEUTRAL_SCORE);
        assert_eq!(keyword_presence_score(Some("   \t"), Some("anything")), NEUTRAL_SCORE);
        assert_eq!(keyword_presence_score(Some("phd"), Some("")), NEUTRAL_SCORE);
    }
}
