use crate::models::AssessmentReport;

use super::tables::{DEFAULT_SPECIALTY, EXACT_CONDITIONS, KEYWORD_RULES};

/// Resolve one condition to its specialty candidates.
///
/// First hit wins across tiers: the exact table (case-insensitive), then
/// the keyword rules (union of every hit), then the default specialty.
pub fn resolve_condition(condition: &str) -> Vec<&'static str> {
    let trimmed = condition.trim();
    if let Some(specialty) = exact_specialty(trimmed) {
        return vec![specialty];
    }

    let hits = keyword_hits(trimmed);
    if hits.is_empty() {
        vec![DEFAULT_SPECIALTY]
    } else {
        hits
    }
}

/// Resolve a set of conditions into an ordered, deduplicated candidate set.
/// The default specialty is always present as a safety net.
pub fn resolve_candidates<'a, I>(conditions: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut candidates: Vec<String> = Vec::new();
    for condition in conditions {
        for specialty in resolve_condition(condition) {
            push_unique(&mut candidates, specialty);
        }
    }
    push_unique(&mut candidates, DEFAULT_SPECIALTY);
    candidates
}

/// Report-level resolution over the report's conditions and any
/// specializations the model suggested directly.
pub fn resolve_report_specialties(report: &AssessmentReport) -> Vec<String> {
    let conditions = report
        .possible_conditions
        .iter()
        .map(String::as_str)
        .chain(
            report
                .specializations
                .iter()
                .flatten()
                .map(String::as_str),
        );
    resolve_candidates(conditions)
}

fn exact_specialty(condition: &str) -> Option<&'static str> {
    EXACT_CONDITIONS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(condition))
        .map(|(_, specialty)| *specialty)
}

/// Fold the condition through the keyword rules, collecting every hit.
fn keyword_hits(condition: &str) -> Vec<&'static str> {
    let lower = condition.to_lowercase();
    KEYWORD_RULES.iter().fold(Vec::new(), |mut hits, rule| {
        if lower.contains(rule.keyword) && !hits.contains(&rule.specialty) {
            hits.push(rule.specialty);
        }
        hits
    })
}

fn push_unique(candidates: &mut Vec<String>, specialty: &str) {
    if !candidates.iter().any(|c| c.eq_ignore_ascii_case(specialty)) {
        candidates.push(specialty.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UrgencyLevel;

    #[test]
    fn exact_match_wins_over_keywords() {
        // "Heart Disease" is in the exact table; the "heart" keyword never
        // runs, so no extra candidates leak in.
        assert_eq!(resolve_condition("Heart Disease"), vec!["Cardiologist"]);
    }

    #[test]
    fn exact_match_is_case_insensitive() {
        assert_eq!(resolve_condition("migraine"), vec!["Neurologist"]);
        assert_eq!(resolve_condition("MIGRAINE"), vec!["Neurologist"]);
    }

    #[test]
    fn keyword_hits_are_a_union() {
        // "heartburn" contains both "heart" and "heartburn".
        let candidates = resolve_condition("Chronic heartburn");
        assert!(candidates.contains(&"Cardiologist"));
        assert!(candidates.contains(&"Gastroenterologist"));
    }

    #[test]
    fn unmatched_condition_falls_back_to_default() {
        assert_eq!(
            resolve_condition("Unclassified Syndrome"),
            vec![DEFAULT_SPECIALTY]
        );
    }

    #[test]
    fn candidate_set_always_contains_default() {
        let candidates = resolve_candidates(["Heart Disease"]);
        assert_eq!(candidates[0], "Cardiologist");
        assert!(candidates.contains(&DEFAULT_SPECIALTY.to_string()));
    }

    #[test]
    fn candidates_are_deduplicated_in_first_seen_order() {
        let candidates = resolve_candidates(["Migraine", "Severe headache", "Heart Disease"]);
        assert_eq!(
            candidates,
            vec!["Neurologist", "Cardiologist", "General Physician"]
        );
    }

    #[test]
    fn empty_condition_list_yields_default_only() {
        let no_conditions: [&str; 0] = [];
        assert_eq!(resolve_candidates(no_conditions), vec![DEFAULT_SPECIALTY]);
    }

    #[test]
    fn report_resolution_includes_model_specializations() {
        let report = AssessmentReport {
            possible_conditions: vec!["Persistent cough".into()],
            recommendations: vec![],
            urgency_level: UrgencyLevel::NonUrgent,
            follow_up_steps: vec![],
            specializations: Some(vec!["Skin irritation".into()]),
        };
        let candidates = resolve_report_specialties(&report);
        assert!(candidates.contains(&"Pulmonologist".to_string()));
        assert!(candidates.contains(&"Dermatologist".to_string()));
        assert!(candidates.contains(&DEFAULT_SPECIALTY.to_string()));
    }
}
