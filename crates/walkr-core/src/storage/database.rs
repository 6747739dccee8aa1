//! SQLite-based workout storage.
//!
//! Provides persistent storage for:
//! - Generated workouts, keyed by their generated id
//! - Key-value store for application state (e.g. a CLI session in progress)

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::{DatabaseError, Result, ValidationError};
use crate::generator::GeneratedWorkout;

/// A stored workout with its bookkeeping columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub workout: GeneratedWorkout,
    pub created_at: DateTime<Utc>,
}

/// SQLite database for generated workouts.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/walkr/walkr.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        Self::open_at(&data_dir()?.join("walkr.db"))
    }

    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (tests, throwaway sessions).
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS workouts (
                    id          TEXT PRIMARY KEY,
                    goal        TEXT NOT NULL,
                    time        INTEGER NOT NULL,
                    equipment   TEXT NOT NULL,
                    share_text  TEXT NOT NULL,
                    body        TEXT NOT NULL,
                    created_at  TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS kv (
                    key   TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );

                CREATE INDEX IF NOT EXISTS idx_workouts_created_at ON workouts(created_at);",
            )
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))
    }

    /// Store `workout` under its id, replacing any earlier row with that id.
    pub fn save_workout(&self, workout: &GeneratedWorkout) -> Result<DateTime<Utc>> {
        let created_at = Utc::now();
        let body = serde_json::to_string(workout)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO workouts (id, goal, time, equipment, share_text, body, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                workout.id,
                workout.goal.as_str(),
                workout.duration,
                workout.equipment.as_str(),
                workout.share_text,
                body,
                created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            ],
        )?;
        tracing::debug!(id = %workout.id, "saved workout");
        Ok(created_at)
    }

    pub fn get_workout(&self, id: &str) -> Result<Option<WorkoutRecord>> {
        let row = self
            .conn
            .query_row(
                "SELECT body, created_at FROM workouts WHERE id = ?1",
                params![id],
                |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?;
        row.map(|(body, created_at)| Self::record(&body, &created_at))
            .transpose()
    }

    /// Like [`Database::get_workout`], but a missing id is an error.
    pub fn require_workout(&self, id: &str) -> Result<WorkoutRecord> {
        self.get_workout(id)?
            .ok_or_else(|| ValidationError::UnknownWorkout(id.to_string()).into())
    }

    /// Most recent first.
    pub fn list_workouts(&self, limit: usize) -> Result<Vec<WorkoutRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT body, created_at FROM workouts
             ORDER BY created_at DESC
             LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit as i64], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (body, created_at) = row?;
            out.push(Self::record(&body, &created_at)?);
        }
        Ok(out)
    }

    /// Returns whether a row was removed.
    pub fn delete_workout(&self, id: &str) -> Result<bool> {
        let n = self
            .conn
            .execute("DELETE FROM workouts WHERE id = ?1", params![id])?;
        Ok(n > 0)
    }

    fn record(body: &str, created_at: &str) -> Result<WorkoutRecord> {
        let workout: GeneratedWorkout = serde_json::from_str(body)?;
        let created_at = DateTime::parse_from_rfc3339(created_at)
            .map_err(|e| DatabaseError::QueryFailed(format!("bad created_at '{created_at}': {e}")))?
            .with_timezone(&Utc);
        Ok(WorkoutRecord {
            workout,
            created_at,
        })
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn kv_delete(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate_workout, WorkoutRequest};
    use tempfile::TempDir;

    fn workout() -> GeneratedWorkout {
        generate_workout(&WorkoutRequest::new("Strength", 20, "Dumbbells")).unwrap()
    }

    #[test]
    fn save_and_get() {
        let db = Database::open_memory().unwrap();
        let w = workout();
        db.save_workout(&w).unwrap();
        let record = db.get_workout(&w.id).unwrap().unwrap();
        assert_eq!(record.workout, w);
        assert!(db.get_workout("missing").unwrap().is_none());
        assert!(db.require_workout("missing").is_err());
    }

    #[test]
    fn list_is_newest_first_and_limited() {
        let db = Database::open_memory().unwrap();
        let ids: Vec<String> = (0..3)
            .map(|_| {
                let w = workout();
                db.save_workout(&w).unwrap();
                std::thread::sleep(std::time::Duration::from_millis(5));
                w.id
            })
            .collect();
        let listed = db.list_workouts(2).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].workout.id, ids[2]);
        assert_eq!(listed[1].workout.id, ids[1]);
    }

    #[test]
    fn delete_reports_whether_removed() {
        let db = Database::open_memory().unwrap();
        let w = workout();
        db.save_workout(&w).unwrap();
        assert!(db.delete_workout(&w.id).unwrap());
        assert!(!db.delete_workout(&w.id).unwrap());
    }

    #[test]
    fn kv_store() {
        let db = Database::open_memory().unwrap();
        assert!(db.kv_get("test").unwrap().is_none());
        db.kv_set("test", "hello").unwrap();
        assert_eq!(db.kv_get("test").unwrap().unwrap(), "hello");
        db.kv_delete("test").unwrap();
        assert!(db.kv_get("test").unwrap().is_none());
    }

    #[test]
    fn file_database_persists_across_opens() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("walkr.db");
        let w = workout();
        Database::open_at(&path).unwrap().save_workout(&w).unwrap();
        let reopened = Database::open_at(&path).unwrap();
        assert_eq!(reopened.require_workout(&w.id).unwrap().workout.id, w.id);
    }
}
