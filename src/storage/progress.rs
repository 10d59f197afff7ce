//! Progress storage: load, save, and enroll learners.

use std::collections::BTreeMap;

use jiff::Timestamp;
use rusqlite::{Connection, OptionalExtension, params};

use crate::model::{Badge, ProgressRecord};

use super::{ProgressStore, Result, Storage, StorageError};

impl Storage {
    /// Stores `record` as a new learner's starting state.
    pub fn enroll(&self, learner: &str, record: &ProgressRecord) -> Result<()> {
        let mut conn = self.open_db()?;
        if learner_exists(&conn, learner)? {
            return Err(StorageError::LearnerExists(learner.to_string()));
        }
        write_record(&mut conn, learner, record)
    }

    /// Lists every learner with a stored record, sorted by id.
    pub fn learners(&self) -> Result<Vec<String>> {
        let conn = self.open_db()?;
        let mut stmt = conn.prepare("SELECT id FROM learner ORDER BY id")?;
        let ids = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(ids)
    }
}

impl ProgressStore for Storage {
    fn load_progress(&self, learner: &str) -> Result<ProgressRecord> {
        let conn = self.open_db()?;
        load_record(&conn, learner)
    }

    fn save_progress(&self, learner: &str, record: &ProgressRecord) -> Result<()> {
        let mut conn = self.open_db()?;
        write_record(&mut conn, learner, record)
    }
}

fn learner_exists(conn: &Connection, learner: &str) -> Result<bool> {
    let found = conn
        .query_row("SELECT 1 FROM learner WHERE id = ?1", [learner], |_| Ok(()))
        .optional()?;
    Ok(found.is_some())
}

/// Writes the whole record in one transaction.
///
/// Child rows are deleted and reinserted so the stored record matches
/// `record` exactly.
fn write_record(conn: &mut Connection, learner: &str, record: &ProgressRecord) -> Result<()> {
    let xp = i64::try_from(record.xp)
        .map_err(|_| StorageError::Corrupt(format!("xp out of range: {}", record.xp)))?;
    let last = record.last_completed_at.map(|t| t.to_string());

    let tx = conn.transaction()?;
    tx.execute(
        "INSERT INTO learner (id, current_unit, xp, streak, last_completed_at)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(id) DO UPDATE SET
             current_unit = excluded.current_unit,
             xp = excluded.xp,
             streak = excluded.streak,
             last_completed_at = excluded.last_completed_at",
        params![learner, &record.current_unit, xp, record.streak, last],
    )?;

    tx.execute("DELETE FROM completion WHERE learner_id = ?1", [learner])?;
    for (unit, done) in &record.completions {
        tx.execute(
            "INSERT INTO completion (learner_id, unit_key, done) VALUES (?1, ?2, ?3)",
            params![learner, unit, done],
        )?;
    }

    tx.execute("DELETE FROM badge WHERE learner_id = ?1", [learner])?;
    for (position, badge) in record.badges.iter().enumerate() {
        let position = i64::try_from(position)
            .map_err(|_| StorageError::Corrupt("too many badges".into()))?;
        tx.execute(
            "INSERT INTO badge (learner_id, badge, position) VALUES (?1, ?2, ?3)",
            params![learner, badge.as_str(), position],
        )?;
    }

    tx.commit()?;
    Ok(())
}

fn load_record(conn: &Connection, learner: &str) -> Result<ProgressRecord> {
    let row = conn
        .query_row(
            "SELECT current_unit, xp, streak, last_completed_at FROM learner WHERE id = ?1",
            [learner],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, u32>(2)?,
                    row.get::<_, Option<String>>(3)?,
                ))
            },
        )
        .optional()?;
    let Some((current_unit, xp, streak, last)) = row else {
        return Err(StorageError::LearnerNotFound(learner.to_string()));
    };

    let xp = u64::try_from(xp).map_err(|_| StorageError::Corrupt(format!("negative xp: {xp}")))?;
    let last_completed_at = last
        .map(|s| {
            s.parse::<Timestamp>()
                .map_err(|e| StorageError::Corrupt(format!("invalid last_completed_at: {e}")))
        })
        .transpose()?;

    let mut stmt =
        conn.prepare("SELECT unit_key, done FROM completion WHERE learner_id = ?1")?;
    let completions = stmt
        .query_map([learner], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, bool>(1)?))
        })?
        .collect::<rusqlite::Result<BTreeMap<_, _>>>()?;

    let mut stmt =
        conn.prepare("SELECT badge FROM badge WHERE learner_id = ?1 ORDER BY position")?;
    let names = stmt
        .query_map([learner], |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    let badges = names
        .iter()
        .map(|name| name.parse::<Badge>().map_err(StorageError::Corrupt))
        .collect::<Result<Vec<_>>>()?;

    Ok(ProgressRecord {
        completions,
        current_unit,
        xp,
        streak,
        badges,
        last_completed_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn test_storage() -> (TempDir, Storage) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("data")).unwrap();
        (dir, storage)
    }

    fn sample_record() -> ProgressRecord {
        let mut record = ProgressRecord::new("css-syntax");
        record.completions.insert("html-intro".into(), true);
        record.completions.insert("html-headings".into(), false);
        record.xp = 125;
        record.streak = 3;
        record.badges = vec![Badge::JavaScriptNinja, Badge::HtmlNovice];
        record.last_completed_at = Some(Timestamp::new(1_700_000_000, 0).unwrap());
        record
    }

    #[test]
    fn save_and_load_round_trip() {
        let (_dir, storage) = test_storage();
        let record = sample_record();

        storage.save_progress("kim", &record).unwrap();
        let loaded = storage.load_progress("kim").unwrap();

        assert_eq!(loaded, record);
        // Award order is kept, not sorted.
        assert_eq!(loaded.badges[0], Badge::JavaScriptNinja);
    }

    #[test]
    fn fresh_record_round_trips_with_null_timestamp() {
        let (_dir, storage) = test_storage();
        let record = ProgressRecord::new("html-intro");

        storage.save_progress("kim", &record).unwrap();
        let loaded = storage.load_progress("kim").unwrap();

        assert_eq!(loaded, record);
        assert!(loaded.last_completed_at.is_none());
    }

    #[test]
    fn save_replaces_previous_record() {
        let (_dir, storage) = test_storage();
        storage.save_progress("kim", &sample_record()).unwrap();

        let replacement = ProgressRecord::new("html-intro");
        storage.save_progress("kim", &replacement).unwrap();

        let loaded = storage.load_progress("kim").unwrap();
        assert!(loaded.completions.is_empty());
        assert!(loaded.badges.is_empty());
        assert_eq!(loaded.xp, 0);
    }

    #[test]
    fn learners_are_isolated() {
        let (_dir, storage) = test_storage();
        storage.save_progress("kim", &sample_record()).unwrap();
        storage
            .save_progress("lee", &ProgressRecord::new("html-intro"))
            .unwrap();

        assert_eq!(storage.load_progress("kim").unwrap().xp, 125);
        assert_eq!(storage.load_progress("lee").unwrap().xp, 0);
        assert_eq!(storage.learners().unwrap(), vec!["kim", "lee"]);
    }

    #[test]
    fn load_unknown_learner_fails() {
        let (_dir, storage) = test_storage();
        let err = storage.load_progress("nobody").unwrap_err();

        assert!(matches!(err, StorageError::LearnerNotFound(id) if id == "nobody"));
    }

    #[test]
    fn enroll_refuses_existing_learner() {
        let (_dir, storage) = test_storage();
        storage
            .enroll("kim", &ProgressRecord::new("html-intro"))
            .unwrap();
        let err = storage.enroll("kim", &sample_record()).unwrap_err();

        assert!(matches!(err, StorageError::LearnerExists(_)));
        assert_eq!(
            storage.load_progress("kim").unwrap().current_unit,
            "html-intro"
        );
    }

    #[test]
    fn unknown_badge_is_corrupt() {
        let (_dir, storage) = test_storage();
        storage.save_progress("kim", &sample_record()).unwrap();
        let conn = storage.open_db().unwrap();
        conn.execute(
            "UPDATE badge SET badge = 'Rust Wizard' WHERE learner_id = 'kim' AND position = 0",
            [],
        )
        .unwrap();

        let err = storage.load_progress("kim").unwrap_err();
        assert!(matches!(err, StorageError::Corrupt(_)));
    }

    #[test]
    fn record_survives_reopening_storage() {
        let dir = TempDir::new().unwrap();
        let record = sample_record();
        Storage::new(dir.path())
            .unwrap()
            .save_progress("kim", &record)
            .unwrap();

        let reopened = Storage::new(dir.path()).unwrap();
        assert_eq!(reopened.load_progress("kim").unwrap(), record);
    }
}
