//! Contextual prompt substitution.
//!
//! Later prompts refer to the user's difficulty as "it"; once the first
//! answer exists, every whole-word "it" is replaced with a quoted snippet of
//! that answer so the question reads back the user's own words.

use crate::answer::AnswerSet;
use crate::question::DIFFICULTY_QUESTION_ID;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

static IT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bit\b").expect("valid word-boundary pattern"));

/// Number of leading words quoted from the first answer.
const SNIPPET_WORDS: usize = 3;

/// Substitutes whole-word "it" in a prompt with a snippet of answer 1.
///
/// Applies only to questions after the first, and only when answer 1 is
/// non-blank text. The snippet is the first three whitespace-separated words
/// followed by an ellipsis, wrapped in quotes. Substrings such as "itself"
/// or "pit" are left untouched; without a match the text is returned
/// unchanged.
pub fn substitute_prompt(question_id: u32, text: &str, answers: &AnswerSet) -> String {
    if question_id <= DIFFICULTY_QUESTION_ID {
        return text.to_string();
    }
    let Some(difficulty) = answers.text(DIFFICULTY_QUESTION_ID) else {
        return text.to_string();
    };

    let words: Vec<&str> = difficulty.split_whitespace().take(SNIPPET_WORDS).collect();
    if words.is_empty() {
        return text.to_string();
    }

    let snippet = format!("\"{}...\"", words.join(" "));
    IT_PATTERN
        .replace_all(text, NoExpand(&snippet))
        .into_owned()
}
