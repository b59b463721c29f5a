//! Cross-question draft seeding.
//!
//! The shape, color, and texture questions each describe the difficulty per
//! body location, so their drafts are pre-seeded with one `Location:` line
//! per body part identified in question 3, carrying forward the attributes
//! already recorded for that location.

use crate::answer::AnswerSet;
use crate::parse::{body_locations, parse_locations, LocationEntry};
use crate::question::{COLOR_QUESTION_ID, SHAPE_QUESTION_ID, TEXTURE_QUESTION_ID};

fn description_for<'a>(entries: &'a [LocationEntry], location: &str) -> &'a str {
    entries
        .iter()
        .find(|entry| entry.location == location)
        .map(|entry| entry.description.as_str())
        .unwrap_or("")
}

fn parsed_answer(answers: &AnswerSet, question_id: u32) -> Vec<LocationEntry> {
    answers
        .text(question_id)
        .map(parse_locations)
        .unwrap_or_default()
}

/// Builds the seed draft for an unanswered question, if it has one.
///
/// Only the shape (4), color (5), and texture (6) questions are seeded, and
/// only when their prerequisite answers exist:
///
/// - shape: `Loc:` per body location;
/// - color: `Loc: shape:` with the shape recorded in answer 4;
/// - texture: `Loc: shape:color:` with shape and color from answers 4 and 5.
///
/// The seed is a starting draft only; callers must not re-seed a question
/// that already has a stored answer.
pub fn prefill(question_id: u32, answers: &AnswerSet) -> Option<String> {
    let locations = body_locations(answers);
    if locations.is_empty() {
        return None;
    }

    tracing::debug!(
        question_id,
        locations = locations.len(),
        "checking draft prefill"
    );

    match question_id {
        SHAPE_QUESTION_ID => {
            let lines: Vec<String> = locations
                .iter()
                .map(|location| format!("{}:", location))
                .collect();
            Some(lines.join("\n"))
        }
        COLOR_QUESTION_ID => {
            answers.text(SHAPE_QUESTION_ID)?;
            let shapes = parsed_answer(answers, SHAPE_QUESTION_ID);
            let lines: Vec<String> = locations
                .iter()
                .map(|location| {
                    let shape = description_for(&shapes, location);
                    if shape.is_empty() {
                        format!("{}:", location)
                    } else {
                        format!("{}: {}:", location, shape)
                    }
                })
                .collect();
            Some(lines.join("\n"))
        }
        TEXTURE_QUESTION_ID => {
            answers.text(COLOR_QUESTION_ID)?;
            let shapes = parsed_answer(answers, SHAPE_QUESTION_ID);
            let colors = parsed_answer(answers, COLOR_QUESTION_ID);
            let lines: Vec<String> = locations
                .iter()
                .map(|location| {
                    let shape = description_for(&shapes, location);
                    let color = description_for(&colors, location);
                    let mut line = format!("{}:", location);
                    if !shape.is_empty() {
                        line.push_str(&format!(" {}:", shape));
                    }
                    if !color.is_empty() {
                        line.push_str(&format!(" {}:", color));
                    }
                    line
                })
                .collect();
            Some(lines.join("\n"))
        }
        _ => None,
    }
}
