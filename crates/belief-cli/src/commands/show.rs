//! `belief show <id>` - full summary of one session.

use crate::commands::utils::{format_timestamp, print_location_cards};
use anyhow::Result;
use belief_application::{open_session_repository, ReviewUseCase};
use belief_core::question::questions;
use belief_infrastructure::AppConfig;
use colored::Colorize;

pub async fn execute(config: &AppConfig, session_id: &str) -> Result<()> {
    let repository = open_session_repository(config)?;
    let review = ReviewUseCase::new(repository);

    let Some(summary) = review.session_summary(session_id).await? else {
        println!("No session with id {}.", session_id.bright_blue());
        return Ok(());
    };

    let session = &summary.session;
    println!("{}", session.summary_title.bold());
    println!(
        "{}",
        format!(
            "Completed {} (id {})",
            format_timestamp(&session.created_at),
            session.id
        )
        .dimmed()
    );

    println!();
    for question in questions() {
        let Some(answer) = session.answers.get(question.id) else {
            continue;
        };
        println!("{}", question.text.bright_yellow());
        println!("  {}", answer);
    }

    if !summary.locations.is_empty() {
        println!();
        println!("{}", "Where it lives in the body".bold());
        print_location_cards(&summary.locations);
    }

    Ok(())
}
