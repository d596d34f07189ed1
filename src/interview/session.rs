use uuid::Uuid;

use crate::matching::{self, PractitionerDirectory, PractitionerSuggestions};
use crate::models::{AssessmentReport, Question, Symptoms};

use super::parser;
use super::prompt;
use super::types::TextGenerator;
use super::validation;
use super::InterviewError;

/// Interview lifecycle. `Reported` and `Failed` are terminal; `Failed` is
/// reachable from any non-terminal state and a failed session is restarted,
/// not resumed.
#[derive(Debug, Clone)]
pub enum InterviewState {
    /// Gathering symptoms; nothing generated yet.
    Collecting,
    /// Walking the generated questions, one current index.
    Questioning { current: usize },
    /// Every question answered; report request pending.
    Finalizing,
    /// Report produced, with the pre-computed specialty candidate set.
    Reported {
        report: AssessmentReport,
        specialties: Vec<String>,
    },
    /// Last error, with the raw upstream text where one was available.
    Failed {
        message: String,
        raw: Option<String>,
    },
}

impl InterviewState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Collecting => "collecting",
            Self::Questioning { .. } => "questioning",
            Self::Finalizing => "finalizing",
            Self::Reported { .. } => "reported",
            Self::Failed { .. } => "failed",
        }
    }
}

/// One patient's interview, symptoms to report.
///
/// An explicit value with transition methods — no ambient state. Every
/// collaborator call goes through `&mut self`, so a session can never have
/// two generative requests in flight.
#[derive(Debug, Clone)]
pub struct InterviewSession {
    id: Uuid,
    patient_id: String,
    symptoms: Option<Symptoms>,
    questions: Vec<Question>,
    state: InterviewState,
}

impl InterviewSession {
    pub fn new(patient_id: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            patient_id: patient_id.to_string(),
            symptoms: None,
            questions: Vec::new(),
            state: InterviewState::Collecting,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    pub fn state(&self) -> &InterviewState {
        &self.state
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The question at the current index, while questioning.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            InterviewState::Questioning { current } => self.questions.get(current),
            _ => None,
        }
    }

    /// The report, once the session reached `Reported`.
    pub fn report(&self) -> Option<&AssessmentReport> {
        match &self.state {
            InterviewState::Reported { report, .. } => Some(report),
            _ => None,
        }
    }

    /// Specialty candidates pre-computed from the report.
    pub fn specialty_candidates(&self) -> Option<&[String]> {
        match &self.state {
            InterviewState::Reported { specialties, .. } => Some(specialties),
            _ => None,
        }
    }

    /// Submit the symptoms and generate the question set.
    ///
    /// `Collecting → Questioning`, or straight to `Finalizing` when the
    /// model had nothing further to ask.
    pub fn submit_symptoms<G: TextGenerator>(
        &mut self,
        symptoms: Symptoms,
        generator: &G,
    ) -> Result<(), InterviewError> {
        if !matches!(self.state, InterviewState::Collecting) {
            return Err(self.invalid("submit symptoms"));
        }

        let question_prompt = prompt::build_question_prompt(&symptoms);
        let response = generator
            .generate(&question_prompt, prompt::QUESTION_SYSTEM_PROMPT)
            .map_err(|e| self.fail(e))?;
        let questions = parser::parse_question_response(&response).map_err(|e| self.fail(e))?;

        tracing::info!(
            session = %self.id,
            count = questions.len(),
            "interview questions generated"
        );

        self.symptoms = Some(symptoms);
        self.state = if questions.is_empty() {
            InterviewState::Finalizing
        } else {
            InterviewState::Questioning { current: 0 }
        };
        self.questions = questions;
        Ok(())
    }

    /// Record the answer to the current question. An answer is set at most
    /// once and never reset.
    pub fn record_answer(&mut self, answer: &str) -> Result<(), InterviewError> {
        let InterviewState::Questioning { current } = self.state else {
            return Err(self.invalid("record an answer"));
        };
        let question = &mut self.questions[current];
        if question.answer.is_some() {
            return Err(InterviewError::AnswerAlreadyRecorded { index: current });
        }
        question.answer = Some(answer.to_string());
        Ok(())
    }

    /// Move to the next question; at the last answered question, move to
    /// `Finalizing`. Requires the current question to be answered.
    pub fn advance(&mut self) -> Result<(), InterviewError> {
        let InterviewState::Questioning { current } = self.state else {
            return Err(self.invalid("advance"));
        };
        if !self.questions[current].is_answered() {
            return Err(InterviewError::UnansweredQuestion { index: current });
        }
        self.state = if current + 1 == self.questions.len() {
            InterviewState::Finalizing
        } else {
            InterviewState::Questioning { current: current + 1 }
        };
        Ok(())
    }

    /// Step back one question. A no-op at the first question; recorded
    /// answers are kept.
    pub fn retreat(&mut self) -> Result<(), InterviewError> {
        let InterviewState::Questioning { current } = self.state else {
            return Err(self.invalid("retreat"));
        };
        if current > 0 {
            self.state = InterviewState::Questioning { current: current - 1 };
        }
        Ok(())
    }

    /// Generate the assessment report from the completed transcript and
    /// pre-compute the specialty candidate set. `Finalizing → Reported`.
    pub fn finalize<G: TextGenerator>(
        &mut self,
        generator: &G,
    ) -> Result<&AssessmentReport, InterviewError> {
        if !matches!(self.state, InterviewState::Finalizing) {
            return Err(self.invalid("finalize"));
        }
        if let Some(index) = self.questions.iter().position(|q| !q.is_answered()) {
            return Err(InterviewError::UnansweredQuestion { index });
        }

        let report_prompt = {
            let symptoms = self
                .symptoms
                .as_ref()
                .expect("symptoms are set before the session reaches Finalizing");
            prompt::build_report_prompt(symptoms, &self.questions)
        };
        let response = generator
            .generate(&report_prompt, prompt::REPORT_SYSTEM_PROMPT)
            .map_err(|e| self.fail(e))?;
        let report = parser::parse_report_response(&response).map_err(|e| self.fail(e))?;

        let validated = validation::validate_report(report);
        let specialties = matching::resolve_report_specialties(&validated.report);

        tracing::info!(
            session = %self.id,
            urgency = validated.report.urgency_level.as_str(),
            candidates = specialties.len(),
            "assessment report generated"
        );

        self.state = InterviewState::Reported {
            report: validated.report,
            specialties,
        };
        match &self.state {
            InterviewState::Reported { report, .. } => Ok(report),
            _ => unreachable!("state was just set to Reported"),
        }
    }

    /// Match practitioners against the pre-computed specialty candidates.
    /// Valid once the session is `Reported`; directory failures degrade
    /// inside the returned suggestions.
    pub fn suggest_practitioners<D: PractitionerDirectory>(
        &self,
        directory: &D,
    ) -> Result<PractitionerSuggestions, InterviewError> {
        match &self.state {
            InterviewState::Reported { specialties, .. } => {
                Ok(matching::suggest_practitioners(directory, specialties))
            }
            _ => Err(InterviewError::InvalidTransition {
                state: self.state.name(),
                action: "suggest practitioners",
            }),
        }
    }

    fn invalid(&self, action: &'static str) -> InterviewError {
        InterviewError::InvalidTransition {
            state: self.state.name(),
            action,
        }
    }

    /// Record the error and move to `Failed`, keeping raw upstream text
    /// where the error carries it.
    fn fail(&mut self, err: InterviewError) -> InterviewError {
        tracing::warn!(session = %self.id, error = %err, "interview session failed");
        self.state = InterviewState::Failed {
            message: err.to_string(),
            raw: err.raw_response().map(str::to_string),
        };
        err
    }
}
