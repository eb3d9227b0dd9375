//! # Rendering
//!
//! Turns `CmdResult` data into terminal text. Every `render_*` function returns a
//! `String` so layout can be tested without a terminal; `print_*` wrappers do the
//! writing. Colors come from `colored`, which disables itself when stdout is not a
//! terminal or `NO_COLOR` is set.

use advent::api::{CmdMessage, DayEntry, MessageLevel, StatusReport};
use advent::config::AdventConfig;
use advent::model::Record;
use chrono::{DateTime, Utc};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_WIDTH: usize = 40;
const EMPTY_MARKER: &str = "-";

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let styled = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", styled)
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

/// For commands whose stdout is a payload.
pub fn eprint_messages(messages: &[CmdMessage]) {
    eprint!("{}", render_messages(messages));
}

pub fn render_day_list(entries: &[DayEntry]) -> String {
    if entries.is_empty() {
        return "No days in the calendar.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let index = format!("{:>2}. ", entry.day);
        let record = &entry.record;

        if !record.is_filled() {
            output.push_str(&format!("{}{}\n", index.dimmed(), EMPTY_MARKER.dimmed()));
            continue;
        }

        let title = truncate_to_width(&record.title, TITLE_WIDTH);
        let padding = TITLE_WIDTH.saturating_sub(title.width());
        let line = format!(
            "{}{}{}  {:>5}  {}",
            index.yellow(),
            title,
            " ".repeat(padding),
            rating_text(record),
            record.service.dimmed()
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}

pub fn render_day(entry: &DayEntry) -> String {
    let record = &entry.record;
    let title = if record.title.is_empty() {
        EMPTY_MARKER.to_string()
    } else {
        record.title.clone()
    };

    let mut output = format!("{} {}\n", format!("Day {}", entry.day).yellow(), title.bold());
    output.push_str(&format!("  Rating:  {}\n", rating_text(record)));
    output.push_str(&format!("  Service: {}\n", record.service));
    output.push_str("  Notes:\n");
    for line in record.notes.lines() {
        output.push_str(&format!("    {}\n", line));
    }
    output
}

pub fn render_status(status: &StatusReport, config: &AdventConfig) -> String {
    let last_saved = status
        .last_saved
        .map(format_time_ago)
        .unwrap_or_else(|| "never".to_string());

    let mut output = String::new();
    output.push_str(&format!("Days:       {}\n", status.days));
    output.push_str(&format!("Filled:     {} of {}\n", status.filled, status.days));
    output.push_str(&format!("Stored at:  {}\n", status.location));
    output.push_str(&format!("Last saved: {}\n", last_saved));
    if !config.services.is_empty() {
        output.push_str(&format!(
            "Services:   {}\n",
            config.services.join(", ").dimmed()
        ));
    }
    output
}

pub fn render_config(config: &AdventConfig) -> String {
    AdventConfig::KEYS
        .iter()
        .filter_map(|key| config.get(key).map(|value| format!("{} = {}\n", key, value)))
        .collect()
}

/// Writes a payload verbatim, ending it with a newline if it lacks one.
pub fn print_payload(payload: &str) {
    if payload.ends_with('\n') {
        print!("{}", payload);
    } else {
        println!("{}", payload);
    }
}

fn rating_text(record: &Record) -> String {
    record
        .rating
        .map(|r| format!("{}/10", r))
        .unwrap_or_default()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}
