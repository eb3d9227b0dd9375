use crate::calendar::{clamp_days, MAX_DAYS, MIN_DAYS};
use crate::commands::{join_days, CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::DataStore;

pub fn run<S: DataStore>(session: &mut Session<S>, days: u32) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if clamp_days(days) != days {
        result.add_message(CmdMessage::warning(format!(
            "Day count must be between {} and {}; using {}",
            MIN_DAYS,
            MAX_DAYS,
            clamp_days(days)
        )));
    }

    let mutation = session.mutate(|calendar| Ok(calendar.resize(days)))?;
    let report = &mutation.value;

    if !report.dropped_filled.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Removed data for days {}",
            join_days(&report.dropped_filled)
        )));
    }
    result.note_persist(&mutation);

    if report.previous_days == report.days {
        result.add_message(CmdMessage::info(format!(
            "Calendar already has {} days",
            report.days
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Calendar resized from {} to {} days",
            report.previous_days, report.days
        )));
    }
    Ok(result)
}
