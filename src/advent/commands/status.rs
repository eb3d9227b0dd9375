use crate::commands::{CmdResult, StatusReport};
use crate::error::Result;
use crate::session::Session;
use crate::store::DataStore;

pub fn run<S: DataStore>(session: &Session<S>) -> Result<CmdResult> {
    let calendar = session.calendar();
    let store = session.store();

    let status = StatusReport {
        days: calendar.days(),
        filled: calendar.filled_count(),
        location: store.location(),
        last_saved: store.last_saved()?,
    };

    Ok(CmdResult {
        status: Some(status),
        ..CmdResult::default()
    })
}
