//! # Session
//!
//! A [`Session`] owns everything that lives for one run of the tool: the live
//! [`Calendar`], the ephemeral day selection, and the [`DataStore`] it persists to.
//! There is no global state; callers hold the session and pass it by reference.
//!
//! ## Lifecycle
//!
//! 1. [`Session::open`] loads the last snapshot, or starts a fresh calendar when there
//!    is none or it cannot be read.
//! 2. Every change goes through [`Session::mutate`]: the closure runs against a copy of
//!    the calendar, the copy replaces the live calendar only if the closure succeeds,
//!    and the new state is saved.
//! 3. Dropping the session ends it. Saved snapshots outlive it; the selection does not.
//!
//! ## Persistence Failures
//!
//! A failed save never undoes a successful change. The error is logged and handed back
//! in [`Mutation::persist_error`] so the UI can warn about it.

use crate::calendar::Calendar;
use crate::error::{AdventError, Result};
use crate::model::{Field, Record};
use crate::store::{DataStore, Snapshot};

pub struct Session<S: DataStore> {
    calendar: Calendar,
    selection: Option<u32>,
    store: S,
    load_warning: Option<String>,
}

/// Outcome of a successful change.
#[derive(Debug)]
pub struct Mutation<T> {
    pub value: T,
    pub persist_error: Option<AdventError>,
}

impl<S: DataStore> Session<S> {
    pub fn open(store: S, default_days: u32) -> Self {
        let (calendar, load_warning) = match store.load() {
            Ok(Some(snapshot)) => (snapshot.into_calendar(), None),
            Ok(None) => (Calendar::new(default_days), None),
            Err(e) => {
                log::warn!("Could not load calendar from {}: {}", store.location(), e);
                let warning = format!(
                    "Could not read saved calendar ({}); starting with an empty one. \
                     The next change will overwrite {}.",
                    e,
                    store.location()
                );
                (Calendar::new(default_days), Some(warning))
            }
        };
        log::debug!("Session opened with {} days", calendar.days());

        Self {
            calendar,
            selection: None,
            store,
            load_warning,
        }
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The warning produced while loading, if any. Reported once.
    pub fn take_load_warning(&mut self) -> Option<String> {
        self.load_warning.take()
    }

    pub fn selection(&self) -> Option<u32> {
        self.selection
    }

    pub fn select(&mut self, day: u32) -> Result<()> {
        self.calendar.get(day)?;
        self.selection = Some(day);
        Ok(())
    }

    pub fn deselect(&mut self) {
        self.selection = None;
    }

    pub fn mutate<T, F>(&mut self, change: F) -> Result<Mutation<T>>
    where
        F: FnOnce(&mut Calendar) -> Result<T>,
    {
        let mut next = self.calendar.clone();
        let value = change(&mut next)?;
        self.calendar = next;

        if let Some(day) = self.selection {
            if !self.calendar.contains(day) {
                log::debug!("Selection {} fell outside the calendar; cleared", day);
                self.selection = None;
            }
        }

        let persist_error = self.persist().err();
        Ok(Mutation {
            value,
            persist_error,
        })
    }

    /// Edit one field of the selected day.
    pub fn set_selected_field(&mut self, field: Field, value: &str) -> Result<Mutation<Record>> {
        let day = self
            .selection
            .ok_or_else(|| AdventError::Api("No day selected".to_string()))?;
        self.mutate(|calendar| calendar.set_field(day, field, value).cloned())
    }

    pub fn clear_day(&mut self, day: u32) -> Result<Mutation<()>> {
        let mutation = self.mutate(|calendar| calendar.clear_day(day))?;
        if self.selection == Some(day) {
            self.selection = None;
        }
        Ok(mutation)
    }

    pub fn reset_all(&mut self) -> Result<Mutation<()>> {
        let mutation = self.mutate(|calendar| {
            calendar.reset_all();
            Ok(())
        })?;
        self.selection = None;
        Ok(mutation)
    }

    pub fn persist(&mut self) -> Result<()> {
        let snapshot = Snapshot::from_calendar(&self.calendar);
        self.store.save(&snapshot).map_err(|e| {
            log::warn!("Could not save calendar to {}: {}", self.store.location(), e);
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::seeded_store;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn opens_fresh_calendar_when_nothing_saved() {
        let session = Session::open(InMemoryStore::new(), 12);
        assert_eq!(session.calendar().days(), 12);
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn opens_saved_calendar_ignoring_default_days() {
        let session = Session::open(seeded_store(5, &[(2, "Elf")]), 24);
        assert_eq!(session.calendar().days(), 5);
        assert_eq!(session.calendar().get(2).unwrap().title, "Elf");
    }

    #[test]
    fn corrupt_store_falls_back_with_warning() {
        let mut session = Session::open(InMemoryStore::with_raw("{not json"), 24);
        assert_eq!(session.calendar(), &Calendar::new(24));
        assert!(session.take_load_warning().is_some());
        assert!(session.take_load_warning().is_none());
    }

    #[test]
    fn mutations_are_persisted() {
        let mut session = Session::open(InMemoryStore::new(), 5);
        session
            .mutate(|c| c.set_field(3, Field::Title, "Klaus").map(|_| ()))
            .unwrap();

        let reopened = Session::open(
            InMemoryStore::with_raw(session.store().raw().unwrap()),
            24,
        );
        assert_eq!(reopened.calendar(), session.calendar());
    }

    #[test]
    fn failed_change_leaves_calendar_untouched() {
        let mut session = Session::open(seeded_store(5, &[(1, "Elf")]), 24);
        let before = session.calendar().clone();

        let result = session.mutate(|c| {
            c.set_field(1, Field::Title, "changed")?;
            c.set_field(9, Field::Title, "boom").map(|_| ())
        });

        assert!(matches!(result, Err(AdventError::OutOfRange { .. })));
        assert_eq!(session.calendar(), &before);
    }

    #[test]
    fn save_failure_keeps_in_memory_change() {
        let store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        let mut session = Session::open(store, 5);

        session.select(2).unwrap();
        let mutation = session.set_selected_field(Field::Title, "Elf").unwrap();

        assert!(matches!(
            mutation.persist_error,
            Some(AdventError::Persist(_))
        ));
        assert_eq!(session.calendar().get(2).unwrap().title, "Elf");
        assert!(session.store().raw().is_none());
    }

    #[test]
    fn editing_requires_selection() {
        let mut session = Session::open(InMemoryStore::new(), 5);
        assert!(matches!(
            session.set_selected_field(Field::Title, "x"),
            Err(AdventError::Api(_))
        ));
    }

    #[test]
    fn select_rejects_out_of_range() {
        let mut session = Session::open(InMemoryStore::new(), 5);
        assert!(session.select(6).is_err());
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn shrinking_clears_stale_selection() {
        let mut session = Session::open(InMemoryStore::new(), 24);
        session.select(20).unwrap();
        session.mutate(|c| Ok(c.resize(10))).unwrap();
        assert_eq!(session.selection(), None);

        session.select(5).unwrap();
        session.mutate(|c| Ok(c.resize(8))).unwrap();
        assert_eq!(session.selection(), Some(5));
    }

    #[test]
    fn clearing_selected_day_deselects() {
        let mut session = Session::open(seeded_store(5, &[(3, "Elf")]), 24);
        session.select(3).unwrap();
        session.clear_day(3).unwrap();
        assert_eq!(session.selection(), None);
        assert!(!session.calendar().get(3).unwrap().is_filled());
    }

    #[test]
    fn reset_all_deselects_and_keeps_days() {
        let mut session = Session::open(seeded_store(7, &[(1, "A"), (7, "B")]), 24);
        session.select(7).unwrap();
        session.reset_all().unwrap();
        assert_eq!(session.selection(), None);
        assert_eq!(session.calendar(), &Calendar::new(7));
    }
}
