//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for all advent operations, whatever UI is driving them.
//!
//! The facade:
//! - **Owns** the [`Session`] for the lifetime of the client
//! - **Normalizes inputs**: day numbers, field names and format names arrive as
//!   user-facing strings and are parsed into typed values here
//! - **Dispatches** to the matching `commands::*::run`
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic and no terminal I/O.
//!
//! ## Load Warnings
//!
//! If the saved calendar could not be read when the session opened, the first
//! result handed out carries that warning ahead of its own messages.
//!
//! ## Generic Over DataStore
//!
//! - Production: `AdventApi<FileStore>`
//! - Testing: `AdventApi<InMemoryStore>`

use crate::commands;
use crate::error::{AdventError, Result};
use crate::import::ImportFormat;
use crate::model::Field;
use crate::session::Session;
use crate::store::DataStore;
use std::path::{Path, PathBuf};

pub struct AdventApi<S: DataStore> {
    session: Session<S>,
    config_dir: PathBuf,
}

impl<S: DataStore> AdventApi<S> {
    pub fn new(store: S, default_days: u32, config_dir: PathBuf) -> Self {
        Self {
            session: Session::open(store, default_days),
            config_dir,
        }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn list_days(&mut self) -> Result<CmdResult> {
        let result = commands::list::run(&self.session)?;
        Ok(self.attach_load_warning(result))
    }

    pub fn view_day(&mut self, day: &str) -> Result<CmdResult> {
        let day = parse_day(day)?;
        let result = commands::view::run(&self.session, day)?;
        Ok(self.attach_load_warning(result))
    }

    /// Applies `(field name, value)` pairs to one day, in order.
    pub fn update_day<K: AsRef<str>, V: AsRef<str>>(
        &mut self,
        day: &str,
        updates: &[(K, V)],
    ) -> Result<CmdResult> {
        let day = parse_day(day)?;
        let updates = updates
            .iter()
            .map(|(field, value)| -> Result<FieldUpdate> {
                let field: Field = field.as_ref().parse()?;
                Ok(FieldUpdate::new(field, value.as_ref()))
            })
            .collect::<Result<Vec<_>>>()?;
        let result = commands::update::run(&mut self.session, day, &updates)?;
        Ok(self.attach_load_warning(result))
    }

    pub fn clear_day(&mut self, day: &str) -> Result<CmdResult> {
        let day = parse_day(day)?;
        let result = commands::clear::run(&mut self.session, day)?;
        Ok(self.attach_load_warning(result))
    }

    pub fn reset_all(&mut self, confirmed: bool) -> Result<CmdResult> {
        let result = commands::reset::run(&mut self.session, confirmed)?;
        Ok(self.attach_load_warning(result))
    }

    pub fn resize(&mut self, days: u32) -> Result<CmdResult> {
        let result = commands::resize::run(&mut self.session, days)?;
        Ok(self.attach_load_warning(result))
    }

    pub fn import_file(&mut self, path: &Path, format: Option<&str>) -> Result<CmdResult> {
        let format = format.map(str::parse::<ImportFormat>).transpose()?;
        let result = commands::import::run_file(&mut self.session, path, format)?;
        Ok(self.attach_load_warning(result))
    }

    pub fn import_text(&mut self, text: &str, format: &str) -> Result<CmdResult> {
        let format: ImportFormat = format.parse()?;
        let result = commands::import::run(&mut self.session, format, text)?;
        Ok(self.attach_load_warning(result))
    }

    pub fn export(&mut self, format: &str, output: Option<&Path>) -> Result<CmdResult> {
        let format: ExportFormat = format.parse()?;
        let result = commands::export::run(&self.session, format, output)?;
        Ok(self.attach_load_warning(result))
    }

    pub fn share(&mut self) -> Result<CmdResult> {
        let result = commands::share::run(&self.session)?;
        Ok(self.attach_load_warning(result))
    }

    pub fn status(&mut self) -> Result<CmdResult> {
        let result = commands::status::run(&self.session)?;
        Ok(self.attach_load_warning(result))
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    fn attach_load_warning(&mut self, mut result: CmdResult) -> CmdResult {
        if let Some(warning) = self.session.take_load_warning() {
            result.messages.insert(0, CmdMessage::warning(warning));
        }
        result
    }
}

fn parse_day(input: &str) -> Result<u32> {
    input
        .trim()
        .parse()
        .map_err(|_| AdventError::Api(format!("Invalid day: {}", input)))
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::export::ExportFormat;
pub use crate::commands::update::FieldUpdate;
pub use crate::commands::{CmdMessage, CmdResult, DayEntry, MessageLevel, StatusReport};
