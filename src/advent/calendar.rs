//! # Calendar: the Day → Record Store
//!
//! [`Calendar`] owns the mapping from day-key to [`Record`] and the current `days`
//! bound. It is the only place the reconciliation rules live.
//!
//! ## Invariants
//!
//! After every operation completes:
//! - The key set is exactly `1..=days`: no gaps, nothing beyond `days`.
//! - `days` is within `[MIN_DAYS, MAX_DAYS]`.
//!
//! ## Resize
//!
//! [`Calendar::resize`] builds a fresh all-empty map for the new range and overlays the
//! previous records for every day present in both ranges. Shrinking drops the tail for
//! good: growing back yields empty days, not the old ones.
//!
//! ## Merge
//!
//! [`Calendar::merge`] applies a partial [`DayMap`] with **whole-record overwrite**:
//! each imported day replaces the stored record wholesale, days the import does not
//! mention are untouched. Keys that do not name a day in the current range are ignored
//! and reported. The merged map is built on the side and swapped in at the end.

use std::collections::BTreeMap;

use crate::error::{AdventError, Result};
use crate::model::{Field, Record};

pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 31;
pub const DEFAULT_DAYS: u32 = 24;

/// A partial day-map as produced by the importers, keyed by the raw day-key text.
pub type DayMap = BTreeMap<String, Record>;

pub fn clamp_days(days: u32) -> u32 {
    days.clamp(MIN_DAYS, MAX_DAYS)
}

/// Parses an external day-key ("3", " 12 ") into a day number.
pub fn parse_day_key(key: &str) -> Option<u32> {
    key.trim().parse::<u32>().ok()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    days: u32,
    records: BTreeMap<u32, Record>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeReport {
    pub previous_days: u32,
    pub days: u32,
    /// Days that held data and fell outside the new range.
    pub dropped_filled: Vec<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub applied: Vec<u32>,
    pub ignored: Vec<String>,
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(DEFAULT_DAYS)
    }
}

impl Calendar {
    pub fn new(days: u32) -> Self {
        let days = clamp_days(days);
        Self {
            days,
            records: empty_records(days),
        }
    }

    /// Builds a calendar of `days` days, taking each in-range entry of `records` verbatim.
    pub fn from_records(days: u32, records: BTreeMap<u32, Record>) -> Self {
        let mut calendar = Self::new(days);
        for (day, record) in records {
            if let Some(slot) = calendar.records.get_mut(&day) {
                *slot = record;
            }
        }
        calendar
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn contains(&self, day: u32) -> bool {
        (MIN_DAYS..=self.days).contains(&day)
    }

    pub fn get(&self, day: u32) -> Result<&Record> {
        self.records.get(&day).ok_or(AdventError::OutOfRange {
            day,
            days: self.days,
        })
    }

    pub fn set_day(&mut self, day: u32, record: Record) -> Result<()> {
        let days = self.days;
        let slot = self
            .records
            .get_mut(&day)
            .ok_or(AdventError::OutOfRange { day, days })?;
        *slot = record;
        Ok(())
    }

    pub fn set_field(&mut self, day: u32, field: Field, value: &str) -> Result<&Record> {
        let next = self.get(day)?.set_field(field, value);
        self.set_day(day, next)?;
        self.get(day)
    }

    pub fn clear_day(&mut self, day: u32) -> Result<()> {
        self.set_day(day, Record::empty())
    }

    pub fn reset_all(&mut self) {
        self.records = empty_records(self.days);
    }

    pub fn resize(&mut self, new_days: u32) -> ResizeReport {
        let previous_days = self.days;
        let days = clamp_days(new_days);

        let mut records = empty_records(days);
        let mut dropped_filled = Vec::new();
        for (day, record) in std::mem::take(&mut self.records) {
            if day <= days {
                records.insert(day, record);
            } else if record.is_filled() {
                dropped_filled.push(day);
            }
        }

        self.days = days;
        self.records = records;

        ResizeReport {
            previous_days,
            days,
            dropped_filled,
        }
    }

    pub fn merge(&mut self, incoming: &DayMap) -> MergeReport {
        let mut report = MergeReport::default();
        let mut next = self.records.clone();

        for (key, record) in incoming {
            match parse_day_key(key).filter(|day| self.contains(*day)) {
                Some(day) => {
                    next.insert(day, record.clone());
                    if !report.applied.contains(&day) {
                        report.applied.push(day);
                    }
                }
                None => report.ignored.push(key.clone()),
            }
        }

        report.applied.sort_unstable();
        self.records = next;
        report
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &Record)> {
        self.records.iter().map(|(day, record)| (*day, record))
    }

    /// Records for days `1..=days`, in order.
    pub fn records(&self) -> Vec<Record> {
        self.records.values().cloned().collect()
    }

    pub fn filled_count(&self) -> usize {
        self.records.values().filter(|r| r.is_filled()).count()
    }
}

fn empty_records(days: u32) -> BTreeMap<u32, Record> {
    (MIN_DAYS..=days).map(|day| (day, Record::empty())).collect()
}
