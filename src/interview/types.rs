use super::InterviewError;

/// Generative text collaborator abstraction (allows mocking).
///
/// Takes a prompt and a system instruction, returns the raw completion. The
/// completion carries no structural guarantees: it may be wrapped in a
/// fenced code block or padded with prose, so callers decode it through the
/// parsers in this module.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str, system: &str) -> Result<String, InterviewError>;
}
