use serde::{Deserialize, Serialize};

use super::enums::QuestionKind;

/// One interview question, decoded from the generative model's output.
///
/// `answer` is absent on the wire and set at most once by the interview
/// flow; it is never reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    /// Required for choice kinds, absent otherwise.
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub answer: Option<String>,
}

impl Question {
    pub fn is_answered(&self) -> bool {
        self.answer.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_type_field() {
        let q: Question = serde_json::from_str(
            r#"{"id":"1","text":"Fever?","type":"boolean","options":null}"#,
        )
        .unwrap();
        assert_eq!(q.kind, QuestionKind::Boolean);
        assert!(q.options.is_none());
        assert!(q.answer.is_none());
    }

    #[test]
    fn round_trips_with_answer() {
        let q = Question {
            id: "q2".into(),
            text: "How long have you had the cough?".into(),
            kind: QuestionKind::SingleChoice,
            options: Some(vec!["Days".into(), "Weeks".into(), "Months".into()]),
            answer: Some("Weeks".into()),
        };
        let json = serde_json::to_string(&q).unwrap();
        let back: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }
}
