use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::share;
use crate::store::DataStore;

pub fn run<S: DataStore>(session: &Session<S>) -> Result<CmdResult> {
    let code = share::encode(session.calendar())?;
    let mut result = CmdResult::default().with_output(code);
    result.add_message(CmdMessage::info(
        "Import with: advent import --format share <file or ->",
    ));
    Ok(result)
}
