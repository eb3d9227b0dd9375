//! # Storage Layer
//!
//! This module defines the persistence abstraction for advent. The [`DataStore`] trait
//! saves and loads a [`Snapshot`] of the calendar; the [`Session`](crate::session::Session)
//! calls `save` after every successful mutation.
//!
//! ## Durability Is Best-Effort
//!
//! The in-memory calendar is authoritative for the running session. A failed `save`
//! is reported to the caller but never rolls the calendar back, and a failed or corrupt
//! `load` falls back to a fresh calendar.
//!
//! ## Snapshot Format
//!
//! ```json
//! { "days": 24, "records": { "1": { "title": "", "rating": null, "notes": "", "service": "" }, ... } }
//! ```
//!
//! `days` is stored alongside the records so it round-trips exactly. The loader also
//! accepts the older bare day-map (`{ "1": {...}, "2": {...} }`); for those the day
//! count is the highest valid day-key.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage in `calendar.json`, written atomically.
//! - [`memory::InMemoryStore`]: For testing without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! $ADVENT_HOME/
//! ├── calendar.json       # Snapshot
//! └── config.json         # Configuration
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::calendar::{clamp_days, parse_day_key, Calendar, DEFAULT_DAYS};
use crate::error::{AdventError, Result};
use crate::model::Record;

pub mod fs;
pub mod memory;

pub const SNAPSHOT_FILENAME: &str = "calendar.json";

/// Abstract interface for calendar persistence.
pub trait DataStore {
    /// Load the last saved snapshot. `Ok(None)` when nothing was saved yet.
    fn load(&self) -> Result<Option<Snapshot>>;

    /// Persist a snapshot, replacing the previous one.
    fn save(&mut self, snapshot: &Snapshot) -> Result<()>;

    /// Human-readable location of the stored data.
    fn location(&self) -> String;

    /// When the stored snapshot was last written, if known.
    fn last_saved(&self) -> Result<Option<DateTime<Utc>>>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub days: u32,
    pub records: BTreeMap<u32, Record>,
}

impl Snapshot {
    pub fn from_calendar(calendar: &Calendar) -> Self {
        Self {
            days: calendar.days(),
            records: calendar.iter().map(|(d, r)| (d, r.clone())).collect(),
        }
    }

    pub fn into_calendar(self) -> Calendar {
        Calendar::from_records(self.days, self.records)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(AdventError::Serialization)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| AdventError::Parse(format!("Corrupt calendar snapshot: {}", e)))
    }
}

impl<'de> Deserialize<'de> for Snapshot {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let helper = SnapshotHelper::deserialize(deserializer)?;

        Ok(match helper {
            SnapshotHelper::Current { days, records } => Snapshot {
                days: clamp_days(days),
                records: numeric_keys(records),
            },
            SnapshotHelper::Legacy(records) => {
                let records = numeric_keys(records);
                let days = records
                    .keys()
                    .next_back()
                    .copied()
                    .map(clamp_days)
                    .unwrap_or(DEFAULT_DAYS);
                Snapshot { days, records }
            }
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotHelper {
    Current {
        days: u32,
        records: BTreeMap<String, Record>,
    },
    Legacy(BTreeMap<String, Record>),
}

fn numeric_keys(records: BTreeMap<String, Record>) -> BTreeMap<u32, Record> {
    records
        .into_iter()
        .filter_map(|(key, record)| match parse_day_key(&key) {
            Some(day) if day >= 1 => Some((day, record)),
            _ => {
                log::warn!("Dropping snapshot entry with invalid day-key {:?}", key);
                None
            }
        })
        .collect()
}
