//! Session domain model.

use crate::answer::AnswerSet;
use crate::question::{DIFFICULTY_QUESTION_ID, TITLE_QUESTION_ID};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User id recorded until real accounts exist.
pub const DEFAULT_USER_ID: &str = "user123";

/// Title used when neither the title question nor the opening answer can
/// provide one.
pub const UNTITLED_SESSION: &str = "Untitled Session";

/// Characters of answer 1 kept when deriving a fallback title.
const TITLE_SNIPPET_CHARS: usize = 30;

/// A completed questionnaire run.
///
/// Created once when the last question is answered, appended to the session
/// store, and never mutated or deleted afterwards. Field names serialize in
/// camelCase to match the store layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    /// Millisecond-timestamp identifier
    pub id: String,
    pub user_id: String,
    /// RFC 3339 creation timestamp
    pub created_at: String,
    pub answers: AnswerSet,
    /// Derived display title; never empty
    pub summary_title: String,
}

impl SessionData {
    /// Builds a session record for the given completion time.
    pub fn with_timestamp(
        user_id: impl Into<String>,
        answers: AnswerSet,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: completed_at.timestamp_millis().to_string(),
            user_id: user_id.into(),
            created_at: completed_at.to_rfc3339(),
            summary_title: summary_title(&answers),
            answers,
        }
    }

    /// Builds a session record completed now.
    pub fn new(user_id: impl Into<String>, answers: AnswerSet) -> Self {
        Self::with_timestamp(user_id, answers, Utc::now())
    }
}

/// Derives the display title for a finished answer set.
///
/// The answer to the final title question wins when present and non-blank;
/// otherwise the opening difficulty is truncated to thirty characters with
/// an ellipsis. An empty answer set falls back to a fixed string so the
/// title is never empty.
pub fn summary_title(answers: &AnswerSet) -> String {
    if let Some(title) = answers.text(TITLE_QUESTION_ID) {
        if !title.trim().is_empty() {
            return title.to_string();
        }
    }

    let difficulty = answers.text(DIFFICULTY_QUESTION_ID).unwrap_or("");
    let shortened = if difficulty.chars().count() > TITLE_SNIPPET_CHARS {
        let prefix: String = difficulty.chars().take(TITLE_SNIPPET_CHARS).collect();
        format!("{}...", prefix)
    } else {
        difficulty.to_string()
    };

    if shortened.is_empty() {
        UNTITLED_SESSION.to_string()
    } else {
        shortened
    }
}
