//! Reference panels derived from earlier answers.
//!
//! While answering, the user sees a short recap of the answers that give the
//! current question its context; the summary view additionally shows every
//! attribute recorded per body location.

use crate::answer::{AnswerSet, AnswerValue};
use crate::parse::{body_locations, parse_locations, LocationEntry};
use crate::question::{
    BACKGROUND_COLOR_QUESTION_ID, BODY_LOCATION_QUESTION_ID, COLOR_QUESTION_ID,
    DIFFICULTY_QUESTION_ID, DIMENSION_QUESTION_ID, EMOTION_QUESTION_ID, SHAPE_QUESTION_ID,
    TEXTURE_QUESTION_ID,
};

/// A labeled earlier answer shown alongside the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub question_id: u32,
    pub label: &'static str,
    pub answer: AnswerValue,
}

/// Earlier answers relevant to the given question.
///
/// The opening difficulty is always recapped after question 1; the emotion
/// and body-location answers are recapped for the visualization questions
/// (4 through 8) that build on them.
pub fn relevant_answers(question_id: u32, answers: &AnswerSet) -> Vec<ReferenceEntry> {
    let mut entries = Vec::new();

    if question_id != DIFFICULTY_QUESTION_ID {
        if let Some(answer) = answers.get(DIFFICULTY_QUESTION_ID) {
            entries.push(ReferenceEntry {
                question_id: DIFFICULTY_QUESTION_ID,
                label: "Your current challenge:",
                answer: answer.clone(),
            });
        }
    }

    let visualizing = (SHAPE_QUESTION_ID..=BACKGROUND_COLOR_QUESTION_ID).contains(&question_id);
    if visualizing {
        if let Some(answer) = answers.get(EMOTION_QUESTION_ID) {
            entries.push(ReferenceEntry {
                question_id: EMOTION_QUESTION_ID,
                label: "Associated emotions:",
                answer: answer.clone(),
            });
        }
        if let Some(answer) = answers.get(BODY_LOCATION_QUESTION_ID) {
            entries.push(ReferenceEntry {
                question_id: BODY_LOCATION_QUESTION_ID,
                label: "Body locations:",
                answer: answer.clone(),
            });
        }
    }

    entries
}

/// Every attribute recorded for one body location across answers 4-8.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationAttributes {
    pub location: String,
    pub shape: String,
    pub color: String,
    pub texture: String,
    pub dimension: String,
    pub background_color: String,
}

fn description_for(entries: &[LocationEntry], location: &str) -> String {
    entries
        .iter()
        .find(|entry| entry.location == location)
        .map(|entry| entry.description.clone())
        .unwrap_or_default()
}

/// Collects the per-location attributes for the summary view.
///
/// Locations come from answer 3; attributes are matched by exact location
/// name in answers 4 (shape), 5 (color), 6 (texture), 7 (dimension), and
/// 8 (background color). Duplicate locations produce duplicate cards, as
/// typed.
pub fn location_attributes(answers: &AnswerSet) -> Vec<LocationAttributes> {
    let locations = body_locations(answers);
    if locations.is_empty() {
        return Vec::new();
    }

    let parsed = |question_id: u32| {
        answers
            .text(question_id)
            .map(parse_locations)
            .unwrap_or_default()
    };

    let shapes = parsed(SHAPE_QUESTION_ID);
    let colors = parsed(COLOR_QUESTION_ID);
    let textures = parsed(TEXTURE_QUESTION_ID);
    let dimensions = parsed(DIMENSION_QUESTION_ID);
    let backgrounds = parsed(BACKGROUND_COLOR_QUESTION_ID);

    locations
        .into_iter()
        .map(|location| LocationAttributes {
            shape: description_for(&shapes, &location),
            color: description_for(&colors, &location),
            texture: description_for(&textures, &location),
            dimension: description_for(&dimensions, &location),
            background_color: description_for(&backgrounds, &location),
            location,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_is_recapped_after_question_one() {
        let mut answers = AnswerSet::new();
        answers.insert(DIFFICULTY_QUESTION_ID, "I feel stuck at work");

        assert!(relevant_answers(DIFFICULTY_QUESTION_ID, &answers).is_empty());

        let entries = relevant_answers(2, &answers);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].question_id, DIFFICULTY_QUESTION_ID);
    }

    #[test]
    fn visualization_questions_recap_emotions_and_locations() {
        let mut answers = AnswerSet::new();
        answers.insert(DIFFICULTY_QUESTION_ID, "I feel stuck");
        answers.insert(EMOTION_QUESTION_ID, "fear, shame");
        answers.insert(BODY_LOCATION_QUESTION_ID, "Chest");

        let entries = relevant_answers(SHAPE_QUESTION_ID, &answers);
        let ids: Vec<u32> = entries.iter().map(|e| e.question_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        // Question 10 is past the visualization block.
        let entries = relevant_answers(10, &answers);
        let ids: Vec<u32> = entries.iter().map(|e| e.question_id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn attributes_are_matched_by_location_name() {
        let mut answers = AnswerSet::new();
        answers.insert(BODY_LOCATION_QUESTION_ID, "Chest: tight, Throat: dry");
        answers.insert(SHAPE_QUESTION_ID, "Chest: knot\nThroat: cloud");
        answers.insert(COLOR_QUESTION_ID, "Chest: dark red");
        answers.insert(TEXTURE_QUESTION_ID, "Throat: rough");

        let attributes = location_attributes(&answers);
        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes[0].location, "Chest");
        assert_eq!(attributes[0].shape, "knot");
        assert_eq!(attributes[0].color, "dark red");
        assert_eq!(attributes[0].texture, "");
        assert_eq!(attributes[1].location, "Throat");
        assert_eq!(attributes[1].texture, "rough");
    }

    #[test]
    fn no_locations_yields_no_attribute_cards() {
        assert!(location_attributes(&AnswerSet::new()).is_empty());
    }
}
