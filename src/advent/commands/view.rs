use crate::commands::{CmdResult, DayEntry};
use crate::error::Result;
use crate::session::Session;
use crate::store::DataStore;

pub fn run<S: DataStore>(session: &Session<S>, day: u32) -> Result<CmdResult> {
    let record = session.calendar().get(day)?;
    Ok(CmdResult::default().with_listed_days(vec![DayEntry::new(day, record)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdventError;
    use crate::store::memory::fixtures::seeded_store;

    #[test]
    fn views_single_day() {
        let session = Session::open(seeded_store(5, &[(3, "Elf")]), 24);
        let result = run(&session, 3).unwrap();
        assert_eq!(result.listed_days.len(), 1);
        assert_eq!(result.listed_days[0].record.title, "Elf");
    }

    #[test]
    fn out_of_range_is_error() {
        let session = Session::open(seeded_store(5, &[]), 24);
        assert!(matches!(
            run(&session, 6),
            Err(AdventError::OutOfRange { day: 6, days: 5 })
        ));
    }
}
