//! Question domain model.

/// The input style a question expects.
///
/// Beyond selecting the input widget, the kind decides which suggestion
/// source the wizard offers (emotion search, body locations, textures).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Text,
    Emotion,
    Scale,
    Color,
    Shape,
    Texture,
    BodyLocation,
}

/// A single questionnaire prompt.
///
/// Questions are immutable and defined once in [`catalog`](super::catalog);
/// ids are unique and densely ordered starting at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Position in the sequence (1..N)
    pub id: u32,
    /// Prompt text; may contain the word "it" which the wizard substitutes
    /// with a snippet of the first answer
    pub text: &'static str,
    /// Input style
    pub kind: QuestionKind,
    /// Example text shown when the field is empty
    pub placeholder: Option<&'static str>,
    /// Supplementary guidance shown under the prompt
    pub description: Option<&'static str>,
}

impl Question {
    pub const fn new(
        id: u32,
        text: &'static str,
        kind: QuestionKind,
        placeholder: Option<&'static str>,
        description: Option<&'static str>,
    ) -> Self {
        Self {
            id,
            text,
            kind,
            placeholder,
            description,
        }
    }

    /// Whether this question is answered on a 0-10 scale.
    pub fn is_scale(&self) -> bool {
        self.kind == QuestionKind::Scale
    }
}
