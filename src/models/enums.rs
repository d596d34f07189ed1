use serde::{Deserialize, Serialize};

/// Question kinds as emitted by the generative model.
///
/// Wire spellings are camelCase (`multipleChoice`, `singleChoice`, `text`,
/// `boolean`); the wire field itself is named `type` (see `Question`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionKind {
    MultipleChoice,
    SingleChoice,
    Text,
    Boolean,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "multipleChoice",
            Self::SingleChoice => "singleChoice",
            Self::Text => "text",
            Self::Boolean => "boolean",
        }
    }

    /// Choice kinds require an `options` list; the other kinds must not
    /// carry one.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::MultipleChoice | Self::SingleChoice)
    }
}

/// Urgency of an assessment, highest first.
///
/// Wire spellings are the human-facing labels ("Non-urgent", "Self-care"),
/// exactly as the report prompt requests them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UrgencyLevel {
    Emergency,
    Urgent,
    #[serde(rename = "Non-urgent")]
    NonUrgent,
    #[serde(rename = "Self-care")]
    SelfCare,
}

impl UrgencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Emergency => "Emergency",
            Self::Urgent => "Urgent",
            Self::NonUrgent => "Non-urgent",
            Self::SelfCare => "Self-care",
        }
    }
}

/// Appointment lifecycle status. Only `Scheduled` is written by this engine;
/// the later transitions belong to the booking store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}
