//! # Domain Model: Day Records
//!
//! A [`Record`] is the value stored in one calendar slot. Every slot always holds a
//! record; an "empty" day is a record whose four fields are at their defaults.
//!
//! ## Fields
//!
//! | Field | Type | Default |
//! |-------|------|---------|
//! | `title` | free text | `""` |
//! | `rating` | integer in `[1, 10]` | unset |
//! | `notes` | free text | `""` |
//! | `service` | free text, suggested from [`SUGGESTED_SERVICES`] | `""` |
//!
//! ## Rating Normalization
//!
//! Ratings arrive as text (CLI flags, CSV cells) or as JSON numbers/strings. All of them
//! go through [`normalize_rating`]:
//!
//! - Empty, non-numeric or non-finite input → unset.
//! - Numeric input → truncated towards zero, then clamped to `[1, 10]`.
//!
//! So `"15"` becomes `10`, `"7.9"` becomes `7`, `"0"` becomes `1` and `"abc"` is unset.
//!
//! ## Lenient Loading
//!
//! Older snapshots stored ratings as strings (`"8"`, `""`) and imported files may carry
//! numbers in text fields. Deserialization accepts both; serialization always writes the
//! canonical shape (`rating` as a number or `null`).

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AdventError;

pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 10;

pub const SUGGESTED_SERVICES: [&str; 4] = ["Netflix", "Disney+", "Amazon Prime", "Paramount"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    pub title: String,
    pub rating: Option<u8>,
    pub notes: String,
    pub service: String,
}

impl Record {
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when any field differs from its default. Used for display only.
    pub fn is_filled(&self) -> bool {
        !self.title.is_empty()
            || self.rating.is_some()
            || !self.notes.is_empty()
            || !self.service.is_empty()
    }

    /// Returns a copy of this record with `field` replaced by `value`.
    pub fn set_field(&self, field: Field, value: &str) -> Self {
        let mut next = self.clone();
        match field {
            Field::Title => next.title = value.to_string(),
            Field::Rating => next.rating = normalize_rating(value),
            Field::Notes => next.notes = value.to_string(),
            Field::Service => next.service = value.to_string(),
        }
        next
    }

    /// Text form of a field, as shown to users and written to CSV.
    pub fn field_text(&self, field: Field) -> String {
        match field {
            Field::Title => self.title.clone(),
            Field::Rating => self.rating.map(|r| r.to_string()).unwrap_or_default(),
            Field::Notes => self.notes.clone(),
            Field::Service => self.service.clone(),
        }
    }
}

pub fn normalize_rating(input: &str) -> Option<u8> {
    input.trim().parse::<f64>().ok().and_then(clamp_rating)
}

fn clamp_rating(value: f64) -> Option<u8> {
    if !value.is_finite() {
        return None;
    }
    let clamped = value
        .trunc()
        .clamp(f64::from(RATING_MIN), f64::from(RATING_MAX));
    Some(clamped as u8)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Rating,
    Notes,
    Service,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Title, Field::Rating, Field::Notes, Field::Service];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Rating => "rating",
            Field::Notes => "notes",
            Field::Service => "service",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = AdventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(Field::Title),
            "rating" => Ok(Field::Rating),
            "notes" => Ok(Field::Notes),
            "service" => Ok(Field::Service),
            other => Err(AdventError::Api(format!("Unknown field: {}", other))),
        }
    }
}

// Accepts legacy and hand-written shapes; see module docs.
impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let helper = RecordHelper::deserialize(deserializer)?;

        Ok(Record {
            title: helper.title.map(LooseValue::into_text).unwrap_or_default(),
            rating: helper.rating.and_then(LooseValue::into_rating),
            notes: helper.notes.map(LooseValue::into_text).unwrap_or_default(),
            service: helper.service.map(LooseValue::into_text).unwrap_or_default(),
        })
    }
}

#[derive(Deserialize)]
struct RecordHelper {
    #[serde(default)]
    title: Option<LooseValue>,
    #[serde(default)]
    rating: Option<LooseValue>,
    #[serde(default)]
    notes: Option<LooseValue>,
    #[serde(default)]
    service: Option<LooseValue>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl LooseValue {
    fn into_text(self) -> String {
        match self {
            LooseValue::Text(s) => s,
            LooseValue::Int(n) => n.to_string(),
            LooseValue::Float(n) => n.to_string(),
            LooseValue::Bool(b) => b.to_string(),
        }
    }

    fn into_rating(self) -> Option<u8> {
        match self {
            LooseValue::Text(s) => normalize_rating(&s),
            LooseValue::Int(n) => clamp_rating(n as f64),
            LooseValue::Float(n) => clamp_rating(n),
            LooseValue::Bool(_) => None,
        }
    }
}
