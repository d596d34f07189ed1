use std::sync::LazyLock;

use regex::Regex;

use crate::models::{AssessmentReport, Question};

use super::InterviewError;

/// Soft cap the question prompt asks the model to respect. Longer lists are
/// logged, never truncated.
pub const QUESTION_SOFT_CAP: usize = 5;

/// Innermost fenced block, optional language tag, non-greedy across lines.
static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```[a-zA-Z0-9]*[ \t]*\r?\n?(.*?)```").unwrap());

/// Strip a fenced code block when one is present; otherwise return the raw
/// text. Pre-processing only — decoding is a separate step.
pub fn extract_payload(response: &str) -> &str {
    match FENCED_BLOCK.captures(response) {
        Some(caps) => caps.get(1).map_or(response, |m| m.as_str()),
        None => response,
    }
    .trim()
}

/// Decode a question-generation response into a typed question list.
///
/// Fails closed: any decode problem is a typed error carrying the full raw
/// response, never a partial list.
pub fn parse_question_response(response: &str) -> Result<Vec<Question>, InterviewError> {
    let payload = extract_payload(response);
    let questions: Vec<Question> =
        serde_json::from_str(payload).map_err(|e| InterviewError::JsonParsing {
            reason: e.to_string(),
            raw: response.to_string(),
        })?;

    for question in &questions {
        check_kind_options(question, response)?;
    }

    if questions.len() > QUESTION_SOFT_CAP {
        tracing::warn!(
            count = questions.len(),
            cap = QUESTION_SOFT_CAP,
            "generated question list exceeds the model soft cap"
        );
    }

    Ok(questions)
}

/// Decode a report response into a typed assessment report. Same failure
/// contract as `parse_question_response`.
pub fn parse_report_response(response: &str) -> Result<AssessmentReport, InterviewError> {
    let payload = extract_payload(response);
    serde_json::from_str(payload).map_err(|e| InterviewError::JsonParsing {
        reason: e.to_string(),
        raw: response.to_string(),
    })
}

/// Choice kinds require options; the other kinds must not carry any.
fn check_kind_options(question: &Question, raw: &str) -> Result<(), InterviewError> {
    let has_options = question.options.as_ref().is_some_and(|o| !o.is_empty());
    if question.kind.is_choice() && !has_options {
        return Err(InterviewError::MalformedResponse {
            reason: format!(
                "question '{}' is {} but has no options",
                question.id,
                question.kind.as_str()
            ),
            raw: raw.to_string(),
        });
    }
    if !question.kind.is_choice() && has_options {
        return Err(InterviewError::MalformedResponse {
            reason: format!(
                "question '{}' is {} but carries options",
                question.id,
                question.kind.as_str()
            ),
            raw: raw.to_string(),
        });
    }
    Ok(())
}
