use serde::{Deserialize, Serialize};

/// Patient-entered symptoms at the start of an interview.
///
/// Immutable once submitted to question generation: the session takes
/// ownership and the same value is re-serialized into the report prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Symptoms {
    /// Ordered symptom tags as the patient picked them.
    pub symptoms: Vec<String>,
    /// Optional free-text description.
    pub description: Option<String>,
}

impl Symptoms {
    pub fn new(symptoms: Vec<String>, description: Option<String>) -> Self {
        Self {
            symptoms,
            description,
        }
    }
}
