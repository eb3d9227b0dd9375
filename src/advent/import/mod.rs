//! # Import Reconciler
//!
//! Every import source is first parsed into a partial [`DayMap`] and only then merged
//! into the calendar with [`Calendar::merge`](crate::calendar::Calendar::merge). Parsing
//! never touches the calendar, so a failed parse leaves it exactly as it was.
//!
//! ## Sources
//!
//! - [`json`]: a JSON object keyed by day (`{"3": {"title": "X"}}`). Malformed input
//!   is a [`Parse`](crate::error::AdventError::Parse) error.
//! - [`csv`]: a header line plus comma-separated rows. Unusable input produces an
//!   empty map rather than an error.
//! - [`share`](crate::share): a share code, decoded to a day-array.
//!
//! ## Merge Policy
//!
//! Whole-record overwrite, in-range keys only. See [`crate::calendar`].

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::calendar::DayMap;
use crate::error::{AdventError, Result};
use crate::share;

pub mod csv;
pub mod json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Json,
    Csv,
    Share,
}

impl ImportFormat {
    /// Guess the format from a file extension. Anything unknown is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .as_deref()
        {
            Some("csv") => ImportFormat::Csv,
            Some("txt") | Some("share") => ImportFormat::Share,
            _ => ImportFormat::Json,
        }
    }

    pub fn parse(&self, text: &str) -> Result<DayMap> {
        match self {
            ImportFormat::Json => json::parse(text),
            ImportFormat::Csv => Ok(csv::parse(text)),
            ImportFormat::Share => share::decode(text).map(share::into_day_map),
        }
    }
}

impl fmt::Display for ImportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImportFormat::Json => "json",
            ImportFormat::Csv => "csv",
            ImportFormat::Share => "share",
        };
        f.write_str(name)
    }
}

impl FromStr for ImportFormat {
    type Err = AdventError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ImportFormat::Json),
            "csv" => Ok(ImportFormat::Csv),
            "share" => Ok(ImportFormat::Share),
            other => Err(AdventError::Api(format!("Unknown import format: {}", other))),
        }
    }
}
