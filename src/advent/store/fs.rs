use super::{DataStore, Snapshot, SNAPSHOT_FILENAME};
use crate::error::{AdventError, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::SystemTime;
use uuid::Uuid;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.root.join(SNAPSHOT_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|e| {
                AdventError::Persist(format!("cannot create {}: {}", self.root.display(), e))
            })?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Option<Snapshot>> {
        let path = self.snapshot_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(AdventError::Io)?;
        Snapshot::from_json(&content).map(Some)
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.ensure_dir()?;
        let content = snapshot.to_json()?;
        let target = self.snapshot_path();

        // Atomic write
        let tmp_file = self.root.join(format!(".calendar-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content)
            .and_then(|_| fs::rename(&tmp_file, &target))
            .map_err(|e| {
                let _ = fs::remove_file(&tmp_file);
                AdventError::Persist(format!("cannot write {}: {}", target.display(), e))
            })?;

        log::debug!("Saved {} days to {}", snapshot.days, target.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.snapshot_path().display().to_string()
    }

    fn last_saved(&self) -> Result<Option<DateTime<Utc>>> {
        let path = self.snapshot_path();
        if !path.exists() {
            return Ok(None);
        }
        let meta = fs::metadata(path).map_err(AdventError::Io)?;
        Ok(modified_at(meta.modified()))
    }
}

/// `None` when the platform cannot report an mtime.
fn modified_at(modified: io::Result<SystemTime>) -> Option<DateTime<Utc>> {
    modified.ok().map(DateTime::<Utc>::from)
}
