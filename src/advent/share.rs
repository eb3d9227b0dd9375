//! # Share Codes
//!
//! A share code is the full day-array (records for days `1..=days`, in order),
//! serialized as JSON and base64-encoded from its UTF-8 bytes, so titles in any script
//! survive the trip. It is meant to travel as a URL fragment, so a leading `#` is
//! accepted when decoding.
//!
//! Decoding is strict: bad base64, bad UTF-8, bad JSON and any payload that is not an
//! array are all rejected with [`AdventError::Parse`].

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::Value;

use crate::calendar::{Calendar, DayMap, MAX_DAYS};
use crate::error::{AdventError, Result};
use crate::model::Record;

pub fn encode(calendar: &Calendar) -> Result<String> {
    let json = serde_json::to_string(&calendar.records())?;
    Ok(STANDARD.encode(json.as_bytes()))
}

pub fn decode(code: &str) -> Result<Vec<Record>> {
    let code = code.trim();
    let code = code.strip_prefix('#').unwrap_or(code);

    let bytes = STANDARD
        .decode(code)
        .map_err(|e| AdventError::Parse(format!("Invalid share code: {}", e)))?;
    let text = String::from_utf8(bytes)
        .map_err(|_| AdventError::Parse("Share code is not valid UTF-8".to_string()))?;
    let value: Value = serde_json::from_str(&text)
        .map_err(|e| AdventError::Parse(format!("Share code is not valid JSON: {}", e)))?;

    if !value.is_array() {
        return Err(AdventError::Parse(
            "Share code must contain a list of days".to_string(),
        ));
    }
    serde_json::from_value(value)
        .map_err(|e| AdventError::Parse(format!("Share code has an invalid day: {}", e)))
}

/// Turns a decoded day-array into a partial day-map keyed `"1".."len"`.
pub fn into_day_map(records: Vec<Record>) -> DayMap {
    records
        .into_iter()
        .zip(1..=MAX_DAYS)
        .map(|(record, day)| (day.to_string(), record))
        .collect()
}
