use crate::models::PractitionerRecord;

use super::DirectoryError;

/// Read-only practitioner directory (allows mocking).
///
/// Treated as a full snapshot read — no live-update contract.
pub trait PractitionerDirectory: Send + Sync {
    fn list_practitioners(&self) -> Result<Vec<PractitionerRecord>, DirectoryError>;

    /// Directory-side specialty filter. The default implementation filters
    /// the snapshot.
    fn by_specialty(&self, specialty: &str) -> Result<Vec<PractitionerRecord>, DirectoryError> {
        let needle = specialty.to_lowercase();
        Ok(self
            .list_practitioners()?
            .into_iter()
            .filter(|p| p.specialty.to_lowercase().contains(&needle))
            .collect())
    }
}

/// Matching outcome: matched practitioners plus a separately surfaced read
/// error, so a failed directory read degrades to "no data" instead of
/// aborting the flow.
#[derive(Debug, Clone, Default)]
pub struct PractitionerSuggestions {
    pub practitioners: Vec<PractitionerRecord>,
    pub directory_error: Option<DirectoryError>,
}
