//! Question definitions and the static questionnaire catalog.

pub mod catalog;
pub mod model;

pub use catalog::{
    question_by_id, questions, BACKGROUND_COLOR_QUESTION_ID, BODY_LOCATION_QUESTION_ID,
    COLOR_QUESTION_ID, DIFFICULTY_QUESTION_ID, DIMENSION_QUESTION_ID, EMOTION_QUESTION_ID,
    INTENSITY_QUESTION_ID, MEMORY_QUESTION_ID, SHAPE_QUESTION_ID, TEXTURE_QUESTION_ID,
    TITLE_QUESTION_ID,
};
pub use model::{Question, QuestionKind};
