//! Shared formatting helpers for the review views.

use belief_core::reference::LocationAttributes;
use chrono::{DateTime, Local};
use colored::Colorize;

/// Formats an RFC 3339 timestamp for display in local time.
///
/// Unparsable timestamps are shown as stored rather than dropped.
pub fn format_timestamp(created_at: &str) -> String {
    match DateTime::parse_from_rfc3339(created_at) {
        Ok(timestamp) => timestamp
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        Err(_) => created_at.to_string(),
    }
}

/// Prints one attribute card per body location, skipping blank attributes.
pub fn print_location_cards(locations: &[LocationAttributes]) {
    for card in locations {
        println!("  {}", card.location.bright_green().bold());
        print_attribute("Shape", &card.shape);
        print_attribute("Color", &card.color);
        print_attribute("Texture", &card.texture);
        print_attribute("Dimension", &card.dimension);
        print_attribute("Background", &card.background_color);
    }
}

fn print_attribute(label: &str, value: &str) {
    if !value.is_empty() {
        println!("    {} {}", format!("{}:", label).dimmed(), value);
    }
}
