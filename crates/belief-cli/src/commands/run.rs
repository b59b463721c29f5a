//! `belief run` - the interactive questionnaire.
//!
//! One rustyline prompt per question. The current draft is pre-filled into
//! the line (carried-forward seeds included), Tab completes the
//! per-question suggestions, `+name` merges a suggestion into the draft,
//! and `/back` revisits the previous question.

use crate::commands::utils::print_location_cards;
use anyhow::Result;
use belief_application::{open_session_repository, StepOutcome, WizardUseCase};
use belief_core::answer::{AnswerSet, AnswerValue};
use belief_core::body_location::BODY_LOCATIONS;
use belief_core::emotion::{looks_like_emotion, search_emotions};
use belief_core::parse::body_locations;
use belief_core::question::{Question, QuestionKind};
use belief_core::reference::location_attributes;
use belief_core::texture::TEXTURES;
use belief_infrastructure::AppConfig;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use std::borrow::Cow::{self, Borrowed, Owned};

/// Maximum scale value accepted for intensity answers.
const SCALE_MAX: u8 = 10;

/// Helper for rustyline that completes wizard commands and the current
/// question's suggestions.
struct WizardHelper {
    commands: Vec<String>,
    suggestions: Vec<String>,
    kind: QuestionKind,
    limit: usize,
}

impl WizardHelper {
    fn new(kind: QuestionKind, suggestions: Vec<String>, limit: usize) -> Self {
        Self {
            commands: vec!["/back".to_string(), "/quit".to_string()],
            suggestions,
            kind,
            limit,
        }
    }

    /// Start of the token under the cursor: just past the last comma or
    /// colon, so completion works inside `Chest: fe`.
    fn token_start(line: &str) -> usize {
        line.rfind([',', ':']).map(|i| i + 1).unwrap_or(0)
    }

    /// Suggestions matching the typed token. The emotion question searches
    /// the full dictionary (names and synonyms); other questions match the
    /// displayed list by prefix.
    fn matching_suggestions(&self, prefix: &str) -> Vec<String> {
        if self.kind == QuestionKind::Emotion {
            return search_emotions(prefix, self.limit)
                .iter()
                .map(|emotion| emotion.name.to_string())
                .collect();
        }
        let prefix = prefix.to_lowercase();
        self.suggestions
            .iter()
            .filter(|s| s.to_lowercase().starts_with(&prefix))
            .cloned()
            .collect()
    }
}

impl Helper for WizardHelper {}

impl Completer for WizardHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            return Ok((0, candidates));
        }

        let start = Self::token_start(line);
        let prefix = line[start..].trim_start();
        if prefix.is_empty() {
            return Ok((pos, vec![]));
        }

        let offset = line.len() - prefix.len();
        let candidates: Vec<Pair> = self
            .matching_suggestions(prefix)
            .into_iter()
            .map(|s| Pair {
                display: s.clone(),
                replacement: s,
            })
            .collect();
        Ok((offset, candidates))
    }
}

impl Highlighter for WizardHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for WizardHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            return self
                .commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string());
        }

        let start = Self::token_start(line);
        let prefix = line[start..].trim_start();
        if prefix.is_empty() {
            return None;
        }
        // A token that is already a known emotion needs no hint.
        if self.kind == QuestionKind::Emotion && looks_like_emotion(prefix) {
            return None;
        }
        self.matching_suggestions(prefix)
            .into_iter()
            .find(|s| {
                s.len() > prefix.len() && s.to_lowercase().starts_with(&prefix.to_lowercase())
            })
            .map(|s| s[prefix.len()..].to_string())
    }
}

impl Validator for WizardHelper {}

/// What one readline interaction produced.
enum Input {
    Answer(AnswerValue),
    Back,
    Abandon,
}

/// Suggestion names offered for the current question.
///
/// The shape and color questions suggest the body locations recorded
/// earlier, since their answers are keyed by location.
fn suggestions_for(question: &Question, answers: &AnswerSet, limit: usize) -> Vec<String> {
    match question.kind {
        QuestionKind::Emotion => search_emotions("", limit)
            .iter()
            .map(|emotion| emotion.name.to_string())
            .collect(),
        QuestionKind::BodyLocation => BODY_LOCATIONS
            .iter()
            .take(limit)
            .map(|location| location.name.to_string())
            .collect(),
        QuestionKind::Texture => TEXTURES
            .iter()
            .take(limit)
            .map(|texture| texture.to_string())
            .collect(),
        QuestionKind::Shape | QuestionKind::Color => {
            let mut locations = body_locations(answers);
            locations.truncate(limit);
            locations
        }
        _ => Vec::new(),
    }
}

pub async fn execute(config: &AppConfig) -> Result<()> {
    let repository = open_session_repository(config)?;
    let mut wizard = WizardUseCase::new(repository, config.user_id.clone());
    let mut editor: Editor<WizardHelper, DefaultHistory> = Editor::new()?;

    println!("{}", "Belief Unlocked".bold());
    println!(
        "{}",
        "Tab completes suggestions, +name adds one, /back revisits, Ctrl-C abandons.".dimmed()
    );

    loop {
        let question = wizard.current_question();
        let (number, total) = wizard.progress();

        println!();
        println!("{}", format!("Question {} of {}", number, total).bright_blue());
        println!("{}", wizard.display_prompt().bold());
        if let Some(description) = question.description {
            println!("{}", description.dimmed());
        }
        if let Some(placeholder) = question.placeholder {
            println!("{}", format!("({})", placeholder).dimmed());
        }

        let draft = wizard.initial_draft();
        for entry in wizard.reference_entries(&draft) {
            println!("  {} {}", entry.label.bright_yellow(), entry.answer);
        }

        let suggestions = suggestions_for(question, wizard.answers(), config.suggestion_limit);
        if !suggestions.is_empty() {
            println!(
                "  {} {}",
                "Suggestions:".bright_green(),
                suggestions.join(", ").dimmed()
            );
        }
        editor.set_helper(Some(WizardHelper::new(
            question.kind,
            suggestions,
            config.suggestion_limit,
        )));

        // Newlines in carried-forward seeds become comma separators; the
        // parser reads both forms the same way.
        let mut draft_text = match &draft {
            AnswerValue::Scale(value) => value.to_string(),
            AnswerValue::Text(text) => text.replace('\n', ", "),
        };

        let input = loop {
            let line = match editor.readline_with_initial("> ", (&draft_text, "")) {
                Ok(line) => line.trim().to_string(),
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break Input::Abandon,
                Err(e) => return Err(e.into()),
            };

            match line.as_str() {
                "/back" => break Input::Back,
                "/quit" => break Input::Abandon,
                _ => {}
            }

            if let Some(name) = line.strip_prefix('+') {
                draft_text = wizard.apply_suggestion(&draft_text, name.trim());
                continue;
            }

            if question.is_scale() {
                match line.parse::<u8>() {
                    Ok(value) if value <= SCALE_MAX => {
                        break Input::Answer(AnswerValue::Scale(value))
                    }
                    _ => {
                        println!(
                            "{}",
                            format!("Please enter a number from 0 to {}.", SCALE_MAX).red()
                        );
                        continue;
                    }
                }
            }

            break Input::Answer(AnswerValue::Text(line));
        };

        match input {
            Input::Answer(value) => match wizard.record_and_advance(value) {
                Ok(StepOutcome::Advanced) => {}
                Ok(StepOutcome::ReadyToComplete) => break,
                Err(e) => println!("{}", e.to_string().red()),
            },
            Input::Back => {
                if !wizard.back() {
                    println!("{}", "Already at the first question.".red());
                }
            }
            Input::Abandon => {
                println!();
                println!("Session abandoned; nothing was saved.");
                return Ok(());
            }
        }
    }

    let session = wizard.complete().await?;

    println!();
    println!("{}", "Session complete".bright_green().bold());
    println!("{}", session.summary_title.bold());
    println!("{}", format!("Saved as session {}", session.id).dimmed());

    let locations = location_attributes(&session.answers);
    if !locations.is_empty() {
        println!();
        println!("{}", "Where it lives in the body".bold());
        print_location_cards(&locations);
    }

    println!();
    println!(
        "{}",
        "Review it any time with `belief show <id>` or `belief history`.".dimmed()
    );

    Ok(())
}
