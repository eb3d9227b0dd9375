use crate::commands::{CmdMessage, CmdResult, DayEntry};
use crate::error::Result;
use crate::session::Session;
use crate::store::DataStore;

pub fn run<S: DataStore>(session: &Session<S>) -> Result<CmdResult> {
    let calendar = session.calendar();
    let days = calendar
        .iter()
        .map(|(day, record)| DayEntry::new(day, record))
        .collect();

    let mut result = CmdResult::default().with_listed_days(days);
    result.add_message(CmdMessage::info(format!(
        "{} of {} days filled",
        calendar.filled_count(),
        calendar.days()
    )));
    Ok(result)
}
