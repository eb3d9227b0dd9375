use crate::commands::{CmdMessage, CmdResult, DayEntry};
use crate::error::Result;
use crate::session::Session;
use crate::store::DataStore;

pub fn run<S: DataStore>(session: &mut Session<S>, day: u32) -> Result<CmdResult> {
    let was_filled = session.calendar().get(day)?.is_filled();
    let mutation = session.clear_day(day)?;

    let mut result = CmdResult::default();
    result.note_persist(&mutation);
    if was_filled {
        result.add_message(CmdMessage::success(format!("Day {} cleared", day)));
    } else {
        result.add_message(CmdMessage::info(format!("Day {} was already empty", day)));
    }
    result
        .affected_days
        .push(DayEntry::new(day, session.calendar().get(day)?));
    Ok(result)
}
