//! Plain comma-separated tables: `day,title,service,rating,notes`.
//!
//! The header is matched by name (case-insensitive, any order, any subset). Cells are
//! split on bare commas with no quoting or escaping, so a comma inside a field shifts
//! the following columns. That is a known limitation of the format as exchanged by the
//! calendar, not something the parser tries to repair.

use crate::calendar::{parse_day_key, DayMap};
use crate::model::{Field, Record};

pub const HEADER: [&str; 5] = ["day", "title", "service", "rating", "notes"];

/// Column positions resolved from the header line.
#[derive(Debug, Default)]
struct Columns {
    day: Option<usize>,
    title: Option<usize>,
    service: Option<usize>,
    rating: Option<usize>,
    notes: Option<usize>,
}

impl Columns {
    fn from_header(line: &str) -> Self {
        let mut columns = Columns::default();
        for (idx, name) in line.split(',').enumerate() {
            let slot = match name.trim().to_ascii_lowercase().as_str() {
                "day" => &mut columns.day,
                "title" => &mut columns.title,
                "service" => &mut columns.service,
                "rating" => &mut columns.rating,
                "notes" => &mut columns.notes,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(idx);
            }
        }
        columns
    }

    fn for_field(&self, field: Field) -> Option<usize> {
        match field {
            Field::Title => self.title,
            Field::Rating => self.rating,
            Field::Notes => self.notes,
            Field::Service => self.service,
        }
    }
}

/// Parses CSV text into a partial day-map. Never fails: unusable input yields an
/// empty map.
pub fn parse(text: &str) -> DayMap {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .collect();

    let mut days = DayMap::new();
    let Some((header, rows)) = lines.split_first() else {
        return days;
    };
    if rows.is_empty() {
        return days;
    }

    let header = header.strip_prefix('\u{feff}').unwrap_or(header);
    let columns = Columns::from_header(header);
    if columns.day.is_none() {
        log::warn!("CSV header has no day column: {:?}", header);
    }

    for row in rows {
        let cells: Vec<&str> = row.split(',').collect();
        let cell = |idx: Option<usize>| {
            idx.and_then(|i| cells.get(i).copied())
                .map(str::trim)
                .unwrap_or("")
        };

        let day = cell(columns.day);
        if day.is_empty() {
            continue;
        }

        let record = Field::ALL
            .iter()
            .fold(Record::empty(), |record, field| {
                record.set_field(*field, cell(columns.for_field(*field)))
            });
        // "03" and "3" are the same day; the later row must win.
        let key = parse_day_key(day)
            .map(|d| d.to_string())
            .unwrap_or_else(|| day.to_string());
        days.insert(key, record);
    }
    days
}

/// Renders records as CSV with the canonical header. Returns the text and the days
/// whose fields contain separators that will not read back faithfully.
pub fn render<'a>(records: impl Iterator<Item = (u32, &'a Record)>) -> (String, Vec<u32>) {
    let mut out = HEADER.join(",");
    out.push('\n');
    let mut unsafe_days = Vec::new();

    for (day, record) in records {
        let cells: Vec<String> = [Field::Title, Field::Service, Field::Rating, Field::Notes]
            .iter()
            .map(|field| record.field_text(*field))
            .collect();
        if cells
            .iter()
            .any(|c| c.contains(',') || c.contains('\n') || c.contains('\r'))
        {
            unsafe_days.push(day);
        }
        out.push_str(&day.to_string());
        for cell in cells {
            out.push(',');
            out.push_str(&cell);
        }
        out.push('\n');
    }
    (out, unsafe_days)
}
