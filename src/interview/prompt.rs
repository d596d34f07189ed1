use crate::models::{Question, Symptoms};

pub const QUESTION_SYSTEM_PROMPT: &str = r#"
You are a medical intake assistant. Your ONLY role is to generate follow-up
questions that clarify a patient's reported symptoms before a practitioner
sees them.

RULES — ABSOLUTE, NO EXCEPTIONS:
1. Generate at most 5 questions, ordered from most to least informative.
2. NEVER diagnose, prescribe, or suggest treatment inside a question.
3. Use plain language a patient can answer without medical knowledge.
4. Every question must be answerable as a choice, free text, or yes/no.
5. If the symptoms need no clarification, output an empty array.
6. Output MUST be a valid JSON array wrapped in ```json``` fences, and
   nothing else.
"#;

pub const REPORT_SYSTEM_PROMPT: &str = r#"
You are a medical intake assistant producing a structured pre-assessment
from a completed symptom interview.

RULES — ABSOLUTE, NO EXCEPTIONS:
1. Base the assessment ONLY on the symptoms and answers provided.
2. This is a pre-assessment, not a diagnosis; phrase conditions as
   possibilities.
3. urgencyLevel MUST be exactly one of: Emergency, Urgent, Non-urgent,
   Self-care.
4. Output MUST be a single JSON object wrapped in ```json``` fences, and
   nothing else.
"#;

/// Build the question-generation prompt from the submitted symptoms.
pub fn build_question_prompt(symptoms: &Symptoms) -> String {
    format!(
        r#"<symptoms>
tags: {tags}
description: {description}
</symptoms>

Generate follow-up questions for the above symptoms as a JSON array:

```json
[
  {{
    "id": "1",
    "text": "question text",
    "type": "multipleChoice | singleChoice | text | boolean",
    "options": ["choice types only, otherwise null"]
  }}
]
```
"#,
        tags = symptoms.symptoms.join(", "),
        description = symptoms.description.as_deref().unwrap_or("(none)"),
    )
}

/// Build the report prompt from the original symptoms and the full
/// question/answer transcript.
pub fn build_report_prompt(symptoms: &Symptoms, questions: &[Question]) -> String {
    let mut transcript = String::new();
    for question in questions {
        transcript.push_str("Q: ");
        transcript.push_str(&question.text);
        transcript.push_str("\nA: ");
        transcript.push_str(question.answer.as_deref().unwrap_or("(not answered)"));
        transcript.push('\n');
    }

    format!(
        r#"<interview>
symptoms: {tags}
description: {description}

{transcript}</interview>

Summarize the interview into this JSON structure:

```json
{{
  "possibleConditions": ["condition name"],
  "recommendations": ["plain-language recommendation"],
  "urgencyLevel": "Emergency | Urgent | Non-urgent | Self-care",
  "followUpSteps": ["concrete next step"],
  "specializations": ["practice area to consult, or null"]
}}
```
"#,
        tags = symptoms.symptoms.join(", "),
        description = symptoms.description.as_deref().unwrap_or("(none)"),
        transcript = transcript,
    )
}
