//! Wizard use case implementation.
//!
//! `WizardUseCase` drives one questionnaire run: it tracks the current
//! position, holds the committed answer set, derives prompts, drafts, and
//! reference panels for the interaction layer, and persists the finished
//! session through the `SessionRepository`.

use anyhow::{bail, Result};
use belief_core::answer::{AnswerSet, AnswerValue};
use belief_core::parse::{extract_body_part, merge_suggestion};
use belief_core::prefill::prefill;
use belief_core::prompt::substitute_prompt;
use belief_core::question::{questions, Question, QuestionKind};
use belief_core::reference::{relevant_answers, ReferenceEntry};
use belief_core::session::{SessionData, SessionRepository};
use std::sync::Arc;

/// Default position of the intensity slider before the user moves it.
pub const DEFAULT_SCALE_VALUE: u8 = 5;

/// Result of recording an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved on to the next question
    Advanced,
    /// The last question was answered; call [`WizardUseCase::complete`]
    ReadyToComplete,
}

/// Orchestrates a single questionnaire run.
///
/// Navigation state is interior to the use case; the interaction layer only
/// hands drafts in and renders what comes back. "Back" discards the current
/// draft implicitly because display state is always re-derived from the
/// committed answers.
pub struct WizardUseCase {
    /// Repository for completed session persistence
    session_repository: Arc<dyn SessionRepository>,
    /// Identifier recorded on the completed session
    user_id: String,
    current_index: usize,
    answers: AnswerSet,
}

impl WizardUseCase {
    /// Creates a new `WizardUseCase` starting at the first question.
    pub fn new(session_repository: Arc<dyn SessionRepository>, user_id: impl Into<String>) -> Self {
        Self {
            session_repository,
            user_id: user_id.into(),
            current_index: 0,
            answers: AnswerSet::new(),
        }
    }

    /// The question currently displayed.
    pub fn current_question(&self) -> &'static Question {
        &questions()[self.current_index]
    }

    /// 1-based position and total, for the progress indicator.
    pub fn progress(&self) -> (usize, usize) {
        (self.current_index + 1, questions().len())
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == questions().len()
    }

    /// The committed answers so far.
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// The current prompt with contextual substitution applied.
    pub fn display_prompt(&self) -> String {
        let question = self.current_question();
        substitute_prompt(question.id, question.text, &self.answers)
    }

    /// The starting draft for the current question.
    ///
    /// A stored answer always wins; otherwise scale questions start at the
    /// slider midpoint and the shape/color/texture questions are seeded from
    /// earlier answers. Seeding therefore never re-runs once an answer is
    /// stored.
    pub fn initial_draft(&self) -> AnswerValue {
        let question = self.current_question();
        if let Some(stored) = self.answers.get(question.id) {
            return stored.clone();
        }
        if question.is_scale() {
            return AnswerValue::Scale(DEFAULT_SCALE_VALUE);
        }
        match prefill(question.id, &self.answers) {
            Some(seed) => AnswerValue::Text(seed),
            None => AnswerValue::Text(String::new()),
        }
    }

    /// Reference panel entries for the current question, computed against
    /// the live answer set (committed answers plus the current draft).
    pub fn reference_entries(&self, draft: &AnswerValue) -> Vec<ReferenceEntry> {
        let question = self.current_question();
        let live = self.answers.with_draft(question.id, draft.clone());
        relevant_answers(question.id, &live)
    }

    /// Merges a clicked suggestion into the current draft text.
    ///
    /// Emotion answers may be scoped to a body part (`Chest: fear, anger`),
    /// so the scope is lifted from the draft before merging; other question
    /// types use the plain comma-separated merge. Duplicate suggestions
    /// leave the draft unchanged.
    pub fn apply_suggestion(&self, draft: &str, suggestion: &str) -> String {
        let body_part = if self.current_question().kind == QuestionKind::Emotion {
            extract_body_part(draft)
        } else {
            None
        };
        merge_suggestion(draft, suggestion, body_part.as_deref())
    }

    /// Records the answer for the current question and advances.
    ///
    /// Blank non-scale answers are refused; the caller keeps the user on the
    /// current question.
    pub fn record_and_advance(&mut self, value: AnswerValue) -> Result<StepOutcome> {
        if !self.current_question().is_scale() && value.is_blank() {
            bail!("an answer is required before moving on");
        }

        self.answers.insert(self.current_question().id, value);

        if self.is_last() {
            Ok(StepOutcome::ReadyToComplete)
        } else {
            self.current_index += 1;
            Ok(StepOutcome::Advanced)
        }
    }

    /// Steps back to the previous question, discarding the current draft.
    ///
    /// Returns `false` when already on the first question.
    pub fn back(&mut self) -> bool {
        if self.current_index == 0 {
            return false;
        }
        self.current_index -= 1;
        true
    }

    /// Completes the run: builds the session record, appends it to the
    /// store, and returns it.
    ///
    /// Only valid once every question has an answer.
    pub async fn complete(&self) -> Result<SessionData> {
        if self.answers.len() < questions().len() {
            bail!(
                "cannot complete: {} of {} questions answered",
                self.answers.len(),
                questions().len()
            );
        }

        let session = SessionData::new(self.user_id.clone(), self.answers.clone());
        self.session_repository.append(&session).await?;
        tracing::info!(session_id = %session.id, "questionnaire completed");
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use belief_core::error::Result as CoreResult;
    use belief_core::question::{
        BODY_LOCATION_QUESTION_ID, SHAPE_QUESTION_ID, TITLE_QUESTION_ID,
    };
    use std::sync::Mutex;

    // In-memory SessionRepository for testing.
    #[derive(Default)]
    struct MockSessionRepository {
        sessions: Mutex<Vec<SessionData>>,
    }

    #[async_trait]
    impl SessionRepository for MockSessionRepository {
        async fn append(&self, session: &SessionData) -> CoreResult<()> {
            self.sessions.lock().unwrap().push(session.clone());
            Ok(())
        }

        async fn find_by_id(&self, session_id: &str) -> CoreResult<Option<SessionData>> {
            Ok(self
                .sessions
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.id == session_id)
                .cloned())
        }

        async fn list_all(&self) -> CoreResult<Vec<SessionData>> {
            Ok(self.sessions.lock().unwrap().clone())
        }
    }

    fn wizard_with_repo() -> (WizardUseCase, Arc<MockSessionRepository>) {
        let repo = Arc::new(MockSessionRepository::default());
        let wizard = WizardUseCase::new(repo.clone(), "tester");
        (wizard, repo)
    }

    fn answer_for(question: &Question, index: usize) -> AnswerValue {
        if question.is_scale() {
            AnswerValue::Scale(7)
        } else if question.id == BODY_LOCATION_QUESTION_ID {
            AnswerValue::Text("Chest: tight, Throat: dry".to_string())
        } else if question.id == TITLE_QUESTION_ID {
            AnswerValue::Text("The Breaking Point".to_string())
        } else {
            AnswerValue::Text(format!("answer {}", index + 1))
        }
    }

    #[tokio::test]
    async fn full_run_appends_exactly_one_session() {
        let (mut wizard, repo) = wizard_with_repo();

        let total = questions().len();
        for index in 0..total {
            let question = wizard.current_question();
            let outcome = wizard.record_and_advance(answer_for(question, index)).unwrap();
            if index + 1 == total {
                assert_eq!(outcome, StepOutcome::ReadyToComplete);
            } else {
                assert_eq!(outcome, StepOutcome::Advanced);
            }
        }

        let session = wizard.complete().await.unwrap();
        assert_eq!(session.summary_title, "The Breaking Point");
        assert_eq!(session.user_id, "tester");

        let stored = repo.list_all().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, session.id);
    }

    #[tokio::test]
    async fn blank_answers_are_refused() {
        let (mut wizard, _repo) = wizard_with_repo();
        assert!(wizard
            .record_and_advance(AnswerValue::Text("   ".to_string()))
            .is_err());
        assert_eq!(wizard.progress(), (1, questions().len()));
    }

    #[tokio::test]
    async fn complete_requires_all_answers() {
        let (mut wizard, repo) = wizard_with_repo();
        wizard
            .record_and_advance(AnswerValue::Text("only the first".to_string()))
            .unwrap();

        assert!(wizard.complete().await.is_err());
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn shape_question_is_seeded_from_body_locations() {
        let (mut wizard, _repo) = wizard_with_repo();
        wizard
            .record_and_advance(AnswerValue::Text("I feel stuck".to_string()))
            .unwrap();
        wizard
            .record_and_advance(AnswerValue::Text("fear".to_string()))
            .unwrap();
        wizard
            .record_and_advance(AnswerValue::Text("Chest: tight, Throat: dry".to_string()))
            .unwrap();

        assert_eq!(wizard.current_question().id, SHAPE_QUESTION_ID);
        assert_eq!(
            wizard.initial_draft(),
            AnswerValue::Text("Chest:\nThroat:".to_string())
        );
    }

    #[tokio::test]
    async fn seeding_never_reruns_once_answered() {
        let (mut wizard, _repo) = wizard_with_repo();
        wizard
            .record_and_advance(AnswerValue::Text("I feel stuck".to_string()))
            .unwrap();
        wizard
            .record_and_advance(AnswerValue::Text("fear".to_string()))
            .unwrap();
        wizard
            .record_and_advance(AnswerValue::Text("Chest: tight".to_string()))
            .unwrap();
        wizard
            .record_and_advance(AnswerValue::Text("Chest: my own shape".to_string()))
            .unwrap();

        // Going back re-derives the stored answer, not the seed.
        assert!(wizard.back());
        assert_eq!(
            wizard.initial_draft(),
            AnswerValue::Text("Chest: my own shape".to_string())
        );
    }

    #[tokio::test]
    async fn back_stops_at_the_first_question() {
        let (mut wizard, _repo) = wizard_with_repo();
        assert!(!wizard.back());
        wizard
            .record_and_advance(AnswerValue::Text("something".to_string()))
            .unwrap();
        assert!(wizard.back());
        assert!(wizard.is_first());
    }

    #[tokio::test]
    async fn scale_question_defaults_to_midpoint() {
        let (mut wizard, _repo) = wizard_with_repo();
        for index in 0..8 {
            let question = wizard.current_question();
            wizard.record_and_advance(answer_for(question, index)).unwrap();
        }
        assert!(wizard.current_question().is_scale());
        assert_eq!(
            wizard.initial_draft(),
            AnswerValue::Scale(DEFAULT_SCALE_VALUE)
        );
    }

    #[tokio::test]
    async fn suggestions_respect_emotion_body_scope() {
        let (mut wizard, _repo) = wizard_with_repo();
        wizard
            .record_and_advance(AnswerValue::Text("I feel stuck".to_string()))
            .unwrap();

        // Now on the emotion question.
        assert_eq!(wizard.apply_suggestion("", "Fear"), "Fear");
        assert_eq!(wizard.apply_suggestion("Fear", "Fear"), "Fear");
        assert_eq!(
            wizard.apply_suggestion("Chest:", "Fear"),
            "Chest: Fear"
        );
        assert_eq!(
            wizard.apply_suggestion("Chest: Fear", "Anger"),
            "Chest: Fear, Anger"
        );
    }

    #[tokio::test]
    async fn prompt_substitution_uses_the_first_answer() {
        let (mut wizard, _repo) = wizard_with_repo();
        wizard
            .record_and_advance(AnswerValue::Text("My boss ignores me daily".to_string()))
            .unwrap();

        // Advance to the shape question, whose prompt contains 'it'.
        wizard
            .record_and_advance(AnswerValue::Text("fear".to_string()))
            .unwrap();
        wizard
            .record_and_advance(AnswerValue::Text("Chest".to_string()))
            .unwrap();

        let prompt = wizard.display_prompt();
        assert!(prompt.contains("\"My boss ignores...\""));
        assert!(!prompt.contains(" it "));
    }
}
