//! The static question sequence.
//!
//! The questionnaire walks these eleven questions in order. Several later
//! steps read earlier answers by id, so the well-known ids are exported as
//! constants instead of being scattered as magic numbers.

use super::model::{Question, QuestionKind};

/// Id of the opening "what is troubling you" question.
pub const DIFFICULTY_QUESTION_ID: u32 = 1;
/// Id of the emotion listing question.
pub const EMOTION_QUESTION_ID: u32 = 2;
/// Id of the body-location question whose answer seeds questions 4-6.
pub const BODY_LOCATION_QUESTION_ID: u32 = 3;
/// Id of the shape question.
pub const SHAPE_QUESTION_ID: u32 = 4;
/// Id of the color question.
pub const COLOR_QUESTION_ID: u32 = 5;
/// Id of the texture question.
pub const TEXTURE_QUESTION_ID: u32 = 6;
/// Id of the dimensionality question.
pub const DIMENSION_QUESTION_ID: u32 = 7;
/// Id of the background color question.
pub const BACKGROUND_COLOR_QUESTION_ID: u32 = 8;
/// Id of the 0-10 intensity question.
pub const INTENSITY_QUESTION_ID: u32 = 9;
/// Id of the earliest-memory question.
pub const MEMORY_QUESTION_ID: u32 = 10;
/// Id of the final title question, used for the session summary title.
pub const TITLE_QUESTION_ID: u32 = 11;

const QUESTIONS: &[Question] = &[
    Question::new(
        DIFFICULTY_QUESTION_ID,
        "What is currently causing you pain or difficulty in any area of your life?",
        QuestionKind::Text,
        Some("Describe what's troubling you..."),
        Some("Be as specific as possible about the situation or thought that's creating difficulty for you."),
    ),
    Question::new(
        EMOTION_QUESTION_ID,
        "What negative emotions are associated with this?",
        QuestionKind::Emotion,
        Some("e.g., shame, fear, sadness, anger..."),
        Some("List all the emotions you feel when thinking about your previous answer. Pick from the suggestions below for ideas."),
    ),
    Question::new(
        BODY_LOCATION_QUESTION_ID,
        "Where do you physically experience these emotions in your body?",
        QuestionKind::BodyLocation,
        Some("e.g., chest tightness, stomach knots, shoulder tension..."),
        Some("Notice where in your body you feel sensations when these emotions arise. You can list multiple locations."),
    ),
    Question::new(
        SHAPE_QUESTION_ID,
        "Please describe the shape or form of 'it'.",
        QuestionKind::Shape,
        Some("e.g., spiral, knot, cloud, sharp edges..."),
        Some("For each body location you identified, describe what shape or form your difficulty takes there."),
    ),
    Question::new(
        COLOR_QUESTION_ID,
        "What color(s) is it?",
        QuestionKind::Color,
        Some("e.g., dark blue, fiery red, murky green..."),
        Some("For each shape you described, what colors do you associate with it?"),
    ),
    Question::new(
        TEXTURE_QUESTION_ID,
        "What texture(s) can you see or feel when you think about it?",
        QuestionKind::Texture,
        Some("e.g., rough, sticky, sharp, heavy..."),
        Some("How would the shapes you described feel if you could touch them? Consider each location separately."),
    ),
    Question::new(
        DIMENSION_QUESTION_ID,
        "Is it two or three-dimensional? Describe its shape in more detail.",
        QuestionKind::Text,
        Some("e.g., flat like a shadow, has depth like a sculpture..."),
        Some("Feel free to be as detailed as you want, there are no wrong answers."),
    ),
    Question::new(
        BACKGROUND_COLOR_QUESTION_ID,
        "What is the color(s) in the background?",
        QuestionKind::Color,
        Some("e.g., white space, gradient of colors, darkness..."),
        Some("What colors surround or are behind your difficulty?"),
    ),
    Question::new(
        INTENSITY_QUESTION_ID,
        "On a scale of 0-10, what is the intensity of emotion(s)?",
        QuestionKind::Scale,
        None,
        Some("0 means no intensity at all, 10 means extremely intense."),
    ),
    Question::new(
        MEMORY_QUESTION_ID,
        "Think of your earliest memory of experiencing this. When was it?",
        QuestionKind::Text,
        Some("e.g., childhood, teenage years, a specific event..."),
        Some("If you can't recall, could this be something passed down through your family?"),
    ),
    Question::new(
        TITLE_QUESTION_ID,
        "Give a title to this memory or experience.",
        QuestionKind::Text,
        Some("e.g., The Rejection, Invisible Child, The Breaking Point..."),
        Some("Create a title that captures the most intense moment or feeling."),
    ),
];

/// Returns the full ordered question sequence.
pub fn questions() -> &'static [Question] {
    QUESTIONS
}

/// Looks up a question by id.
pub fn question_by_id(id: u32) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_dense_and_ordered() {
        for (index, question) in questions().iter().enumerate() {
            assert_eq!(question.id, index as u32 + 1);
        }
    }

    #[test]
    fn well_known_ids_match_kinds() {
        assert_eq!(
            question_by_id(BODY_LOCATION_QUESTION_ID).unwrap().kind,
            QuestionKind::BodyLocation
        );
        assert_eq!(
            question_by_id(INTENSITY_QUESTION_ID).unwrap().kind,
            QuestionKind::Scale
        );
        assert!(question_by_id(TITLE_QUESTION_ID).is_some());
        assert!(question_by_id(12).is_none());
    }
}
