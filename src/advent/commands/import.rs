use crate::commands::{join_days, CmdMessage, CmdResult, DayEntry};
use crate::error::{AdventError, Result};
use crate::import::ImportFormat;
use crate::session::Session;
use crate::store::DataStore;
use std::fs;
use std::path::Path;

/// Reads `path` and imports it. The format is guessed from the extension unless given.
pub fn run_file<S: DataStore>(
    session: &mut Session<S>,
    path: &Path,
    format: Option<ImportFormat>,
) -> Result<CmdResult> {
    if !path.is_file() {
        return Err(AdventError::Api(format!(
            "Import file not found: {}",
            path.display()
        )));
    }
    let text = fs::read_to_string(path).map_err(AdventError::Io)?;
    let format = format.unwrap_or_else(|| ImportFormat::from_path(path));
    log::debug!("Importing {} as {}", path.display(), format);
    run(session, format, &text)
}

/// Parses `text` completely, then merges it in one step. A parse error leaves the
/// calendar untouched.
pub fn run<S: DataStore>(
    session: &mut Session<S>,
    format: ImportFormat,
    text: &str,
) -> Result<CmdResult> {
    let incoming = format.parse(text)?;
    let mut result = CmdResult::default();

    if incoming.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Nothing to import from {} data",
            format
        )));
        return Ok(result);
    }

    let mutation = session.mutate(|calendar| Ok(calendar.merge(&incoming)))?;
    let report = &mutation.value;
    let calendar = session.calendar();

    for day in &report.applied {
        result
            .affected_days
            .push(DayEntry::new(*day, calendar.get(*day)?));
    }

    if !report.ignored.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Ignored {} entries outside days 1-{}: {}",
            report.ignored.len(),
            calendar.days(),
            join_days(&report.ignored)
        )));
    }
    result.note_persist(&mutation);

    if report.applied.is_empty() {
        result.add_message(CmdMessage::info("No days imported"));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Imported {} days from {}: {}",
            report.applied.len(),
            format,
            join_days(&report.applied)
        )));
    }
    Ok(result)
}
