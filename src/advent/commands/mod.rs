//! # Command Layer
//!
//! This module contains the **core business logic** of advent. Each command lives in
//! its own submodule and is a plain function over a [`Session`].
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: No stdout, stderr, prompts or colours
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings:
//! - `listed_days`: Days to display, with their records
//! - `affected_days`: Days changed by the command, post-change
//! - `messages`: Structured messages with levels (info, success, warning, error)
//! - `output`: Raw payloads (exports, share codes) meant to be written verbatim
//! - `config`, `status`: Data for the `config` and `status` commands
//!
//! A change that succeeded but could not be saved is still `Ok`; the failed save
//! shows up as a warning message.
//!
//! ## Command Modules
//!
//! - [`list`]: All days
//! - [`view`]: One day
//! - [`update`]: Field edits on one day
//! - [`clear`]: Empty one day
//! - [`reset`]: Empty every day
//! - [`resize`]: Change the day count
//! - [`import`]: Merge JSON, CSV or share-code data
//! - [`export`]: JSON, CSV or archive output
//! - [`share`]: Produce a share code
//! - [`status`]: Summary of the calendar and its storage
//! - [`config`]: Manage configuration

use chrono::{DateTime, Utc};
use crate::config::AdventConfig;
use crate::model::Record;
use crate::session::Mutation;

pub mod clear;
pub mod config;
pub mod export;
pub mod import;
pub mod list;
pub mod reset;
pub mod resize;
pub mod share;
pub mod status;
pub mod update;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A day paired with its record, as handed to UIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEntry {
    pub day: u32,
    pub record: Record,
}

impl DayEntry {
    pub fn new(day: u32, record: &Record) -> Self {
        Self {
            day,
            record: record.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub days: u32,
    pub filled: usize,
    pub location: String,
    pub last_saved: Option<DateTime<Utc>>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_days: Vec<DayEntry>,
    pub affected_days: Vec<DayEntry>,
    pub messages: Vec<CmdMessage>,
    pub output: Option<String>,
    pub config: Option<AdventConfig>,
    pub status: Option<StatusReport>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_days(mut self, days: Vec<DayEntry>) -> Self {
        self.listed_days = days;
        self
    }

    pub fn with_output(mut self, output: String) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_config(mut self, config: AdventConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Adds a warning when the change could not be saved.
    pub fn note_persist<T>(&mut self, mutation: &Mutation<T>) {
        if let Some(err) = &mutation.persist_error {
            self.add_message(CmdMessage::warning(format!(
                "Change kept for this session but not saved: {}",
                err
            )));
        }
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}

/// "1, 2, 5" for message text.
pub(crate) fn join_days<T: ToString>(days: &[T]) -> String {
    days.iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
