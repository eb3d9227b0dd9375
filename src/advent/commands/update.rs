use crate::commands::{CmdMessage, CmdResult, DayEntry};
use crate::error::Result;
use crate::model::Field;
use crate::session::Session;
use crate::store::DataStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    pub field: Field,
    pub value: String,
}

impl FieldUpdate {
    pub fn new(field: Field, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// Opens `day`, applies each update in order, and closes it again.
pub fn run<S: DataStore>(
    session: &mut Session<S>,
    day: u32,
    updates: &[FieldUpdate],
) -> Result<CmdResult> {
    session.select(day)?;
    let mut result = CmdResult::default();

    if updates.is_empty() {
        session.deselect();
        result.add_message(CmdMessage::info(format!("Nothing to change on day {}", day)));
        return Ok(result);
    }

    let mut save_failed = false;
    for update in updates {
        let mutation = match session.set_selected_field(update.field, &update.value) {
            Ok(mutation) => mutation,
            Err(e) => {
                session.deselect();
                return Err(e);
            }
        };
        if !save_failed && mutation.persist_error.is_some() {
            result.note_persist(&mutation);
            save_failed = true;
        }
    }
    session.deselect();

    let record = session.calendar().get(day)?;
    let changed: Vec<&str> = updates.iter().map(|u| u.field.name()).collect();
    result.add_message(CmdMessage::success(format!(
        "Day {} updated ({})",
        day,
        changed.join(", ")
    )));
    result.affected_days.push(DayEntry::new(day, record));
    Ok(result)
}
