use super::{DataStore, Snapshot};
use crate::error::{AdventError, Result};
use chrono::{DateTime, Utc};
use std::cell::RefCell;

/// In-memory storage for testing.
///
/// Snapshots go through the same JSON encoding as the file store, so round-trip
/// behaviour is exercised without touching the filesystem.
#[derive(Default)]
pub struct InMemoryStore {
    raw: RefCell<Option<String>>,
    saved_at: RefCell<Option<DateTime<Utc>>>,
    simulate_write_error: RefCell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw stored text, e.g. a corrupt or legacy snapshot.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let store = Self::new();
        *store.raw.borrow_mut() = Some(raw.into());
        store
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Option<Snapshot>> {
        match self.raw.borrow().as_deref() {
            Some(text) => Snapshot::from_json(text).map(Some),
            None => Ok(None),
        }
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(AdventError::Persist("Simulated write error".to_string()));
        }
        *self.raw.borrow_mut() = Some(snapshot.to_json()?);
        *self.saved_at.borrow_mut() = Some(Utc::now());
        Ok(())
    }

    fn location(&self) -> String {
        "memory://calendar".to_string()
    }

    fn last_saved(&self) -> Result<Option<DateTime<Utc>>> {
        Ok(*self.saved_at.borrow())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::calendar::Calendar;
    use crate::model::Record;

    /// A store already holding a calendar of `days` days with the given titled days.
    pub fn seeded_store(days: u32, titled: &[(u32, &str)]) -> InMemoryStore {
        let mut calendar = Calendar::new(days);
        for (day, title) in titled {
            calendar
                .set_day(
                    *day,
                    Record {
                        title: title.to_string(),
                        ..Record::default()
                    },
                )
                .unwrap();
        }
        let mut store = InMemoryStore::new();
        store.save(&Snapshot::from_calendar(&calendar)).unwrap();
        store
    }
}
