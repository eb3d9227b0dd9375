use crate::calendar::DayMap;
use crate::error::{AdventError, Result};
use crate::model::Record;
use serde_json::{Map, Value};

/// Parses a JSON day-map: `{ "<day>": { "title": .., "rating": .., .. }, .. }`.
///
/// Either the whole document parses or nothing is returned; a single bad entry fails
/// the import.
pub fn parse(text: &str) -> Result<DayMap> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| AdventError::Parse(format!("Invalid JSON: {}", e)))?;

    let object: Map<String, Value> = match value {
        Value::Object(object) => object,
        other => {
            return Err(AdventError::Parse(format!(
                "Expected a JSON object keyed by day, found {}",
                kind(&other)
            )))
        }
    };

    let mut days = DayMap::new();
    for (key, entry) in object {
        if !entry.is_object() {
            return Err(AdventError::Parse(format!(
                "Day {:?} must be an object, found {}",
                key,
                kind(&entry)
            )));
        }
        let record: Record = serde_json::from_value(entry)
            .map_err(|e| AdventError::Parse(format!("Day {:?}: {}", key, e)))?;
        days.insert(key, record);
    }
    Ok(days)
}

/// Serializes records in the shape [`parse`] reads back.
pub fn render<'a>(records: impl Iterator<Item = (u32, &'a Record)>) -> Result<String> {
    let mut map = Map::new();
    for (day, record) in records {
        map.insert(day.to_string(), serde_json::to_value(record)?);
    }
    serde_json::to_string_pretty(&Value::Object(map)).map_err(AdventError::Serialization)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_records() {
        let days = parse(r#"{"3": {"title": "X"}, "5": {"rating": "15", "service": "Hulu"}}"#)
            .unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(
            days["3"],
            Record {
                title: "X".into(),
                ..Record::default()
            }
        );
        assert_eq!(days["5"].rating, Some(10));
        assert_eq!(days["5"].service, "Hulu");
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(parse("{not json"), Err(AdventError::Parse(_))));
    }

    #[test]
    fn non_object_top_level_is_parse_error() {
        assert!(matches!(parse("[]"), Err(AdventError::Parse(_))));
        assert!(matches!(parse("\"3\""), Err(AdventError::Parse(_))));
    }

    #[test]
    fn non_object_entry_fails_whole_import() {
        let result = parse(r#"{"1": {"title": "ok"}, "2": "not a record"}"#);
        assert!(matches!(result, Err(AdventError::Parse(_))));
    }

    #[test]
    fn keys_are_kept_verbatim() {
        let days = parse(r#"{"christmas": {"title": "x"}}"#).unwrap();
        assert!(days.contains_key("christmas"));
    }

    #[test]
    fn render_reads_back() {
        let records = [
            (1, Record::empty()),
            (
                2,
                Record {
                    title: "Elf".into(),
                    rating: Some(7),
                    notes: "n".into(),
                    service: "Netflix".into(),
                },
            ),
        ];
        let text = render(records.iter().map(|(d, r)| (*d, r))).unwrap();
        let days = parse(&text).unwrap();
        assert_eq!(days["2"], records[1].1);
        assert_eq!(days["1"], Record::empty());
    }
}
