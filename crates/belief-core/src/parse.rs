//! Structured-text parsing and suggestion merging.
//!
//! Several answers use a lightweight `location: description` format, one
//! entry per line, so that later questions can carry attributes forward per
//! body location. Everything here is total: malformed input degrades to a
//! `General` entry or an empty result, never an error.

use crate::answer::AnswerSet;
use crate::question::BODY_LOCATION_QUESTION_ID;
use std::fmt;

/// Location name used when text cannot be attributed to a body part.
pub const GENERAL_LOCATION: &str = "General";

/// A parsed `location: description` pair.
///
/// Derived from answer text on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationEntry {
    pub location: String,
    pub description: String,
}

impl LocationEntry {
    pub fn new(location: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            description: description.into(),
        }
    }

    /// Whether this entry is the catch-all `General` bucket.
    pub fn is_general(&self) -> bool {
        self.location == GENERAL_LOCATION
    }
}

impl fmt::Display for LocationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.description.is_empty() {
            write!(f, "{}:", self.location)
        } else {
            write!(f, "{}: {}", self.location, self.description)
        }
    }
}

/// Serializes entries back to the line-per-entry format accepted by
/// [`parse_locations`].
pub fn format_entries(entries: &[LocationEntry]) -> String {
    entries
        .iter()
        .map(LocationEntry::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses free text into `location: description` entries.
///
/// Text without any colon is read as a comma-separated list of locations
/// with empty descriptions. Text with colons is read line by line: each
/// comma-separated segment containing a colon opens a new entry (left of the
/// first colon is the location), and a colon-free segment extends the
/// description of the entry opened earlier on the same line. A whole line
/// without a colon becomes a `General` entry, and if nothing parses at all
/// the full text collapses into a single `General` entry.
///
/// Idempotent on well-formed input: re-parsing the output of
/// [`format_entries`] yields the same entries.
pub fn parse_locations(text: &str) -> Vec<LocationEntry> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    if !trimmed.contains(':') {
        return trimmed
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|location| LocationEntry::new(location, ""))
            .collect();
    }

    let mut entries: Vec<LocationEntry> = Vec::new();
    for line in trimmed.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if !line.contains(':') {
            entries.push(LocationEntry::new(GENERAL_LOCATION, line));
            continue;
        }

        // Index of the entry opened on this line, so that trailing
        // colon-free segments ("Chest: tight, heavy") extend its
        // description instead of starting a new location.
        let mut open_entry: Option<usize> = None;
        for segment in line.split(',') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }

            match segment.split_once(':') {
                Some((location, description)) => {
                    let location = location.trim();
                    if location.is_empty() {
                        continue;
                    }
                    entries.push(LocationEntry::new(location, description.trim()));
                    open_entry = Some(entries.len() - 1);
                }
                None => match open_entry {
                    Some(index) => {
                        let description = &mut entries[index].description;
                        if description.is_empty() {
                            description.push_str(segment);
                        } else {
                            description.push_str(", ");
                            description.push_str(segment);
                        }
                    }
                    None => entries.push(LocationEntry::new(GENERAL_LOCATION, segment)),
                },
            }
        }
    }

    if entries.is_empty() {
        entries.push(LocationEntry::new(GENERAL_LOCATION, trimmed));
    }

    entries
}

/// Extracts body-location names from the recorded body-location answer.
///
/// Returns an empty list when the answer is missing or not text. `General`
/// entries are excluded; order is preserved and duplicates are kept as
/// typed.
pub fn body_locations(answers: &AnswerSet) -> Vec<String> {
    let Some(text) = answers.text(BODY_LOCATION_QUESTION_ID) else {
        return Vec::new();
    };

    parse_locations(text)
        .into_iter()
        .filter(|entry| !entry.is_general())
        .map(|entry| entry.location)
        .collect()
}

/// The body-part scope of an answer: the text before the first colon.
///
/// `None` when there is no colon or the prefix is blank.
pub fn extract_body_part(text: &str) -> Option<String> {
    let (head, _) = text.split_once(':')?;
    let head = head.trim();
    if head.is_empty() {
        None
    } else {
        Some(head.to_string())
    }
}

/// Splits a comma-separated answer into trimmed, non-empty tokens.
pub fn parse_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether the suggestion is already present as a comma-separated token.
///
/// Tokens carrying a `body part:` prefix are compared by the text after the
/// colon, so `Chest: Fear` counts as containing `Fear`. Comparison is
/// case-insensitive.
fn contains_suggestion(current: &str, suggestion: &str) -> bool {
    parse_list(current).iter().any(|token| {
        let name = match token.rsplit_once(':') {
            Some((_, tail)) => tail.trim(),
            None => token.as_str(),
        };
        name.eq_ignore_ascii_case(suggestion)
    })
}

/// Merges a clicked suggestion into the current answer text.
///
/// With no body part the suggestion is appended to the comma-separated list
/// (or becomes the whole answer when empty). With a body part the result is
/// kept in `body part: a, b` form: the scope is added when no colon exists
/// yet, and new suggestions are appended after the colon otherwise.
///
/// A suggestion already present (case-insensitive token match) leaves the
/// answer unchanged, so repeated clicks are idempotent.
pub fn merge_suggestion(current: &str, suggestion: &str, body_part: Option<&str>) -> String {
    let suggestion = suggestion.trim();
    if suggestion.is_empty() || contains_suggestion(current, suggestion) {
        return current.to_string();
    }

    let trimmed = current.trim();
    match body_part {
        Some(part) => match trimmed.split_once(':') {
            Some((head, tail)) => {
                let tail = tail.trim();
                if tail.is_empty() {
                    format!("{}: {}", head.trim(), suggestion)
                } else {
                    format!("{}: {}, {}", head.trim(), tail, suggestion)
                }
            }
            None => format!("{}: {}", part, suggestion),
        },
        None => {
            if trimmed.is_empty() {
                suggestion.to_string()
            } else {
                format!("{}, {}", trimmed, suggestion)
            }
        }
    }
}
