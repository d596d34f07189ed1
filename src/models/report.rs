use serde::{Deserialize, Serialize};

use super::enums::UrgencyLevel;

/// Structured assessment produced once per completed interview.
///
/// Decoded strictly from the generative model's output (camelCase on the
/// wire); immutable after the session stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    /// Conditions the assessment considers possible, most likely first.
    pub possible_conditions: Vec<String>,
    pub recommendations: Vec<String>,
    pub urgency_level: UrgencyLevel,
    pub follow_up_steps: Vec<String>,
    /// Specialties the model suggested directly, when it offered any.
    #[serde(default)]
    pub specializations: Option<Vec<String>>,
}
