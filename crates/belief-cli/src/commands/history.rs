//! `belief history` - list completed sessions.

use crate::commands::utils::format_timestamp;
use anyhow::Result;
use belief_application::{open_session_repository, ReviewUseCase};
use belief_infrastructure::AppConfig;
use colored::Colorize;

pub async fn execute(config: &AppConfig) -> Result<()> {
    let repository = open_session_repository(config)?;
    let review = ReviewUseCase::new(repository);

    let sessions = review.list_sessions().await?;
    if sessions.is_empty() {
        println!("No sessions yet. Start one with `belief run`.");
        return Ok(());
    }

    println!("{}", format!("{} session(s)", sessions.len()).bold());
    for session in sessions {
        println!(
            "  {}  {}  {}",
            session.id.bright_blue(),
            format_timestamp(&session.created_at).dimmed(),
            session.summary_title
        );
    }
    println!();
    println!("{}", "Use `belief show <id>` to view a session.".dimmed());

    Ok(())
}
