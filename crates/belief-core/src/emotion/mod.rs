//! Emotion reference list, search, and the emotion-likeness detector.

pub mod list;
pub mod model;
pub mod search;

pub use list::EMOTIONS;
pub use model::Emotion;
pub use search::{common_emotions, looks_like_emotion, search_emotions};
