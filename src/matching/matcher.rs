use crate::models::PractitionerRecord;

use super::tables::GENERAL_MARKER;
use super::types::{PractitionerDirectory, PractitionerSuggestions};

/// Match a candidate specialty set against the practitioner directory.
///
/// A practitioner matches when its specialty and any candidate contain each
/// other's normalized stem ("Cardiology" ↔ "Cardiologist" share "cardiolog"),
/// or when the specialty names a generalist. Inclusion only, no ranking.
///
/// Fallback ladder for an empty match set over a non-empty directory:
/// first a generalist entry, else the first entry as provided — the result
/// is non-empty whenever the directory is.
pub fn match_practitioners(
    candidates: &[String],
    directory: &[PractitionerRecord],
) -> Vec<PractitionerRecord> {
    let matched: Vec<PractitionerRecord> = directory
        .iter()
        .filter(|p| specialty_matches(&p.specialty, candidates))
        .cloned()
        .collect();
    if !matched.is_empty() || directory.is_empty() {
        return matched;
    }

    let fallback = directory
        .iter()
        .find(|p| p.specialty.to_lowercase().contains(GENERAL_MARKER))
        .unwrap_or(&directory[0]);
    vec![fallback.clone()]
}

fn specialty_matches(specialty: &str, candidates: &[String]) -> bool {
    if specialty.to_lowercase().contains(GENERAL_MARKER) {
        return true;
    }
    let stem = specialty_stem(specialty);
    candidates.iter().any(|candidate| {
        let candidate_stem = specialty_stem(candidate);
        stem.contains(&candidate_stem) || candidate_stem.contains(&stem)
    })
}

/// Normalize a specialty for substring comparison: lowercase, trailing
/// "-ist"/"-y" trimmed, so "Cardiology" and "Cardiologist" both become
/// "cardiolog".
fn specialty_stem(specialty: &str) -> String {
    let lower = specialty.trim().to_lowercase();
    for suffix in ["ist", "y"] {
        if let Some(stripped) = lower.strip_suffix(suffix) {
            return stripped.to_string();
        }
    }
    lower
}

/// Query the directory and match, degrading a failed read to an empty
/// suggestion list with the error surfaced separately.
pub fn suggest_practitioners<D: PractitionerDirectory>(
    directory: &D,
    candidates: &[String],
) -> PractitionerSuggestions {
    match directory.list_practitioners() {
        Ok(records) => PractitionerSuggestions {
            practitioners: match_practitioners(candidates, &records),
            directory_error: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, "practitioner directory read failed");
            PractitionerSuggestions {
                practitioners: Vec::new(),
                directory_error: Some(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::DirectoryError;
    use crate::models::Schedule;

    fn practitioner(id: &str, specialty: &str) -> PractitionerRecord {
        PractitionerRecord {
            id: id.into(),
            name: format!("Dr. {id}"),
            specialty: specialty.into(),
            schedule: Schedule::default(),
        }
    }

    fn candidates(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn cardiology_matches_cardiologist_candidate() {
        let directory = vec![practitioner("p1", "Cardiology")];
        let matched = match_practitioners(&candidates(&["Cardiologist"]), &directory);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "p1");
    }

    #[test]
    fn empty_directory_returns_empty_without_error() {
        assert!(match_practitioners(&candidates(&["Cardiologist"]), &[]).is_empty());
    }

    #[test]
    fn generalist_always_included() {
        let directory = vec![
            practitioner("p1", "General Medicine"),
            practitioner("p2", "Dermatology"),
        ];
        let matched = match_practitioners(&candidates(&["Neurologist"]), &directory);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "p1");
    }

    #[test]
    fn all_matches_collected_without_ranking() {
        let directory = vec![
            practitioner("p1", "Cardiology"),
            practitioner("p2", "Cardiologist"),
            practitioner("p3", "Dermatology"),
        ];
        let matched = match_practitioners(&candidates(&["Cardiologist"]), &directory);
        let ids: Vec<&str> = matched.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[test]
    fn fallback_prefers_generalist() {
        let directory = vec![
            practitioner("p1", "Dermatology"),
            practitioner("p2", "General Physician"),
        ];
        let matched = match_practitioners(&candidates(&["Cardiologist"]), &directory);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "p2");
    }

    #[test]
    fn fallback_without_generalist_takes_first_entry() {
        let directory = vec![
            practitioner("p1", "Dermatology"),
            practitioner("p2", "Orthopedics"),
        ];
        let matched = match_practitioners(&candidates(&["Cardiologist"]), &directory);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "p1");
    }

    #[test]
    fn non_empty_directory_never_yields_empty_result() {
        // Holds even for an empty candidate set.
        let directory = vec![practitioner("p1", "Orthopedics")];
        let matched = match_practitioners(&[], &directory);
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn match_is_case_insensitive() {
        let directory = vec![practitioner("p1", "NEUROLOGY")];
        let matched = match_practitioners(&candidates(&["neurologist"]), &directory);
        assert_eq!(matched.len(), 1);
    }

    struct StaticDirectory(Vec<PractitionerRecord>);

    impl PractitionerDirectory for StaticDirectory {
        fn list_practitioners(&self) -> Result<Vec<PractitionerRecord>, DirectoryError> {
            Ok(self.0.clone())
        }
    }

    struct BrokenDirectory;

    impl PractitionerDirectory for BrokenDirectory {
        fn list_practitioners(&self) -> Result<Vec<PractitionerRecord>, DirectoryError> {
            Err(DirectoryError::Unavailable("connection refused".into()))
        }
    }

    #[test]
    fn suggestions_from_live_directory() {
        let directory = StaticDirectory(vec![practitioner("p1", "Cardiology")]);
        let suggestions = suggest_practitioners(&directory, &candidates(&["Cardiologist"]));
        assert_eq!(suggestions.practitioners.len(), 1);
        assert!(suggestions.directory_error.is_none());
    }

    #[test]
    fn directory_failure_degrades_to_empty_with_error() {
        let suggestions = suggest_practitioners(&BrokenDirectory, &candidates(&["Cardiologist"]));
        assert!(suggestions.practitioners.is_empty());
        assert!(matches!(
            suggestions.directory_error,
            Some(DirectoryError::Unavailable(_))
        ));
    }

    #[test]
    fn default_specialty_filter_matches_substring() {
        let directory = StaticDirectory(vec![
            practitioner("p1", "Cardiology"),
            practitioner("p2", "Dermatology"),
        ]);
        let filtered = directory.by_specialty("cardio").unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "p1");
    }
}
