//! Local persistence for learner progress.
//!
//! All learners share one `SQLite` file under the storage root:
//!
//! ```text
//! <root>/progress.sqlite
//!   learner      # one row per learner: current unit, xp, streak, last completion
//!   completion   # unit key -> done flag, per learner
//!   badge        # earned badges in award order, per learner
//! ```

mod progress;

use std::{fs, io, path::PathBuf};

use rusqlite::Connection;

use crate::model::ProgressRecord;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("no progress recorded for learner: {0}")]
    LearnerNotFound(String),

    #[error("learner already enrolled: {0}")]
    LearnerExists(String),

    #[error("corrupt progress data: {0}")]
    Corrupt(String),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// Where progress records are read from and written to.
///
/// A save either fully lands or leaves the previous record in place.
pub trait ProgressStore {
    /// Loads a learner's record. `LearnerNotFound` if none was ever saved.
    fn load_progress(&self, learner: &str) -> Result<ProgressRecord>;

    /// Replaces a learner's record, creating it if needed.
    fn save_progress(&self, learner: &str, record: &ProgressRecord) -> Result<()>;
}

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS learner (
        id                TEXT PRIMARY KEY,
        current_unit      TEXT NOT NULL,
        xp                INTEGER NOT NULL,
        streak            INTEGER NOT NULL,
        last_completed_at TEXT
    );
    CREATE TABLE IF NOT EXISTS completion (
        learner_id TEXT NOT NULL REFERENCES learner(id),
        unit_key   TEXT NOT NULL,
        done       INTEGER NOT NULL,
        PRIMARY KEY (learner_id, unit_key)
    );
    CREATE TABLE IF NOT EXISTS badge (
        learner_id TEXT NOT NULL REFERENCES learner(id),
        badge      TEXT NOT NULL,
        position   INTEGER NOT NULL,
        PRIMARY KEY (learner_id, badge)
    );
";

/// Local `SQLite`-backed storage for progress records.
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Creates a new storage instance rooted at the given directory.
    ///
    /// The directory is created if it doesn't exist.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Returns the default storage root: `~/.codetrail/`.
    pub fn default_root() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".codetrail"))
    }

    fn db_path(&self) -> PathBuf {
        self.root.join("progress.sqlite")
    }

    /// Opens the database, creating the schema on first use.
    fn open_db(&self) -> Result<Connection> {
        let conn = Connection::open(self.db_path())?;
        conn.execute_batch(SCHEMA)?;
        Ok(conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn new_creates_root() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested").join("data");
        let _storage = Storage::new(&root).unwrap();
        assert!(root.is_dir());
    }

    #[test]
    fn schema_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path()).unwrap();
        storage.open_db().unwrap();
        storage.open_db().unwrap();
        assert!(storage.db_path().is_file());
    }
}
