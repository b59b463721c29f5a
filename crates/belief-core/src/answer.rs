//! Answers and the per-session answer set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A recorded answer: free text for most questions, an integer for the
/// 0-10 intensity scale.
///
/// Serialized untagged so the session store holds plain strings and numbers,
/// keyed by question id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Scale(u8),
    Text(String),
}

impl AnswerValue {
    /// The text content, if this is a text answer.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(text) => Some(text),
            AnswerValue::Scale(_) => None,
        }
    }

    /// The scale value, if this is a scale answer.
    pub fn as_scale(&self) -> Option<u8> {
        match self {
            AnswerValue::Scale(value) => Some(*value),
            AnswerValue::Text(_) => None,
        }
    }

    /// Whether the answer counts as blank for navigation purposes.
    ///
    /// Scale answers are never blank; text answers are blank when empty or
    /// whitespace-only.
    pub fn is_blank(&self) -> bool {
        match self {
            AnswerValue::Scale(_) => false,
            AnswerValue::Text(text) => text.trim().is_empty(),
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Text(text) => f.write_str(text),
            AnswerValue::Scale(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(text: &str) -> Self {
        AnswerValue::Text(text.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(text: String) -> Self {
        AnswerValue::Text(text)
    }
}

impl From<u8> for AnswerValue {
    fn from(value: u8) -> Self {
        AnswerValue::Scale(value)
    }
}

/// The mapping from question id to recorded answer.
///
/// Grows monotonically as the user advances. The "live" variant used for
/// reference panels additionally contains the in-progress draft for the
/// current question; it is derived with [`AnswerSet::with_draft`] rather than
/// stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<u32, AnswerValue>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records or replaces the answer for a question.
    pub fn insert(&mut self, question_id: u32, value: impl Into<AnswerValue>) {
        self.0.insert(question_id, value.into());
    }

    pub fn get(&self, question_id: u32) -> Option<&AnswerValue> {
        self.0.get(&question_id)
    }

    /// The text answer for a question, or `None` for missing/scale answers.
    pub fn text(&self, question_id: u32) -> Option<&str> {
        self.get(question_id).and_then(AnswerValue::as_text)
    }

    /// The scale answer for a question, or `None` for missing/text answers.
    pub fn scale(&self, question_id: u32) -> Option<u8> {
        self.get(question_id).and_then(AnswerValue::as_scale)
    }

    pub fn contains(&self, question_id: u32) -> bool {
        self.0.contains_key(&question_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &AnswerValue)> {
        self.0.iter().map(|(id, value)| (*id, value))
    }

    /// Derives the live answer set: committed answers plus the in-progress
    /// draft for the currently displayed question.
    pub fn with_draft(&self, question_id: u32, draft: impl Into<AnswerValue>) -> AnswerSet {
        let mut live = self.clone();
        live.insert(question_id, draft);
        live
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_serialization_round_trip() {
        let mut answers = AnswerSet::new();
        answers.insert(1, "I feel stuck at work");
        answers.insert(9, 7u8);

        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"1":"I feel stuck at work","9":7}"#);

        let parsed: AnswerSet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, answers);
        assert_eq!(parsed.text(1), Some("I feel stuck at work"));
        assert_eq!(parsed.scale(9), Some(7));
    }

    #[test]
    fn with_draft_does_not_mutate_committed_answers() {
        let mut answers = AnswerSet::new();
        answers.insert(1, "original");

        let live = answers.with_draft(2, "draft");
        assert_eq!(live.text(2), Some("draft"));
        assert!(!answers.contains(2));
    }

    #[test]
    fn blank_detection() {
        assert!(AnswerValue::Text("   ".to_string()).is_blank());
        assert!(!AnswerValue::Text("Fear".to_string()).is_blank());
        assert!(!AnswerValue::Scale(0).is_blank());
    }
}
