use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::DataStore;

/// Empties every day. Without `confirmed` nothing happens; the UI is expected to ask
/// first.
pub fn run<S: DataStore>(session: &mut Session<S>, confirmed: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let filled = session.calendar().filled_count();

    if !confirmed {
        result.add_message(CmdMessage::warning(format!(
            "Reset not confirmed; {} filled days left untouched.",
            filled
        )));
        return Ok(result);
    }

    let mutation = session.reset_all()?;
    result.note_persist(&mutation);
    result.add_message(CmdMessage::success(format!(
        "Reset all {} days ({} had data)",
        session.calendar().days(),
        filled
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Calendar;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::seeded_store;

    #[test]
    fn requires_confirmation() {
        let mut session = Session::open(seeded_store(5, &[(1, "A")]), 24);
        let result = run(&mut session, false).unwrap();
        assert!(result.has_level(MessageLevel::Warning));
        assert_eq!(session.calendar().filled_count(), 1);
    }

    #[test]
    fn confirmed_reset_empties_everything() {
        let mut session = Session::open(seeded_store(5, &[(1, "A"), (5, "B")]), 24);
        let result = run(&mut session, true).unwrap();
        assert_eq!(session.calendar(), &Calendar::new(5));
        assert_eq!(result.messages[0].content, "Reset all 5 days (2 had data)");
    }
}
