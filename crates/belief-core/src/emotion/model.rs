//! Emotion reference model.

/// An entry in the static emotion reference list.
///
/// Queried by substring match against the name or any synonym. The list is
/// read-only and ordered; ranking and truncation happen in
/// [`search`](super::search).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emotion {
    pub name: &'static str,
    pub description: &'static str,
    pub synonyms: &'static [&'static str],
    /// Optional 0-10 intensity rating; unset for the current reference list.
    pub intensity: Option<u8>,
}

impl Emotion {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        synonyms: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            description,
            synonyms,
            intensity: None,
        }
    }

    /// Whether the lowercased query occurs in the name.
    pub fn name_matches(&self, lower_query: &str) -> bool {
        self.name.to_lowercase().contains(lower_query)
    }

    /// Whether the lowercased query occurs in any synonym.
    pub fn synonym_matches(&self, lower_query: &str) -> bool {
        self.synonyms
            .iter()
            .any(|synonym| synonym.to_lowercase().contains(lower_query))
    }
}
