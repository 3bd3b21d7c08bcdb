/// SQLite implementation of the habit store interface
///
/// This module provides the concrete SQLite implementation for storing
/// and retrieving habit data. All statements are parameterized; no SQL is
/// ever assembled from user input.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use crate::domain::{Habit, HabitId, Periodicity};
use crate::storage::{migrations, HabitStore, StorageError};

/// SQLite-based store implementation
///
/// This struct holds a connection to the SQLite database and implements
/// all the storage operations defined in the HabitStore trait. Writes are
/// serialized on the single connection, which keeps append-then-recompute
/// atomic per habit.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SQLite store instance
    ///
    /// This opens the database file and runs any necessary migrations
    /// to ensure the schema is up to date.
    pub fn new(db_path: PathBuf) -> Result<Self, StorageError> {
        let conn = Connection::open(&db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        // Cascade deletion of a habit's ledger depends on this
        conn.execute("PRAGMA foreign_keys = ON", [])
            .map_err(|e| StorageError::Connection(format!("Failed to enable foreign keys: {}", e)))?;

        migrations::initialize_database(&conn)?;

        tracing::info!("SQLite store initialized at: {:?}", db_path);

        Ok(Self { conn })
    }

    /// In-memory store, used by tests that don't need a file on disk
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        conn.execute("PRAGMA foreign_keys = ON", [])
            .map_err(|e| StorageError::Connection(format!("Failed to enable foreign keys: {}", e)))?;

        migrations::initialize_database(&conn)?;

        Ok(Self { conn })
    }

    /// Rebuild a Habit from its raw column values, failing fast on any
    /// value that doesn't parse rather than producing wrong stats later
    fn habit_from_parts(
        id: String,
        name: String,
        periodicity: String,
        created_at: String,
    ) -> Result<Habit, StorageError> {
        let id = HabitId::from_string(&id).map_err(|_| {
            StorageError::Query(rusqlite::Error::InvalidColumnType(
                0,
                "Invalid habit ID".to_string(),
                rusqlite::types::Type::Text,
            ))
        })?;

        let periodicity: Periodicity = periodicity.parse().map_err(|_| {
            StorageError::Query(rusqlite::Error::InvalidColumnType(
                2,
                "Invalid periodicity".to_string(),
                rusqlite::types::Type::Text,
            ))
        })?;

        let created_at = parse_timestamp(&created_at)?;

        Ok(Habit::from_existing(id, name, periodicity, created_at))
    }
}

/// Parse a stored RFC 3339 timestamp, failing fast on malformed data
fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, StorageError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| StorageError::MalformedTimestamp {
            value: value.to_string(),
        })
}

impl HabitStore for SqliteStore {
    /// Create a new habit, rejecting case-insensitive name collisions
    fn create_habit(&self, habit: &Habit) -> Result<(), StorageError> {
        let exists: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM habits WHERE name = ?1 COLLATE NOCASE)",
            params![habit.name],
            |row| row.get(0),
        )?;

        if exists {
            return Err(StorageError::DuplicateName {
                name: habit.name.clone(),
            });
        }

        self.conn.execute(
            "INSERT INTO habits (id, name, periodicity, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                habit.id.to_string(),
                habit.name,
                habit.periodicity.as_str(),
                habit.created_at.to_rfc3339()
            ],
        )?;

        tracing::debug!("Created habit: {} ({})", habit.name, habit.id);
        Ok(())
    }

    /// Get a habit by its ID
    fn get_habit(&self, habit_id: &HabitId) -> Result<Habit, StorageError> {
        let result = self.conn.query_row(
            "SELECT id, name, periodicity, created_at FROM habits WHERE id = ?1",
            params![habit_id.to_string()],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                ))
            },
        );

        match result {
            Ok((id, name, periodicity, created_at)) => {
                Self::habit_from_parts(id, name, periodicity, created_at)
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(StorageError::HabitNotFound {
                habit: habit_id.to_string(),
            }),
            Err(e) => Err(StorageError::Query(e)),
        }
    }

    /// Get a habit by name, matched case-insensitively
    fn get_habit_by_name(&self, name: &str) -> Result<Habit, StorageError> {
        let result = self.conn.query_row(
            "SELECT id, name, periodicity, created_at FROM habits WHERE name = ?1 COLLATE NOCASE",
            params![name],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                ))
            },
        );

        match result {
            Ok((id, found_name, periodicity, created_at)) => {
                Self::habit_from_parts(id, found_name, periodicity, created_at)
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(StorageError::HabitNotFound {
                habit: name.to_string(),
            }),
            Err(e) => Err(StorageError::Query(e)),
        }
    }

    /// Delete a habit; its completions go with it via the cascade
    fn delete_habit(&self, habit_id: &HabitId) -> Result<(), StorageError> {
        let rows_affected = self.conn.execute(
            "DELETE FROM habits WHERE id = ?1",
            params![habit_id.to_string()],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::HabitNotFound {
                habit: habit_id.to_string(),
            });
        }

        tracing::debug!("Deleted habit and its completions: {}", habit_id);
        Ok(())
    }

    /// List all habits
    fn list_habits(&self) -> Result<Vec<Habit>, StorageError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, periodicity, created_at FROM habits ORDER BY created_at")?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?;

        let mut habits = Vec::new();
        for row in rows {
            let (id, name, periodicity, created_at) = row?;
            habits.push(Self::habit_from_parts(id, name, periodicity, created_at)?);
        }

        Ok(habits)
    }

    /// Append one completion timestamp to a habit's ledger
    fn add_completion(
        &self,
        habit_id: &HabitId,
        completed_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO completions (habit_id, completed_at) VALUES (?1, ?2)",
            params![habit_id.to_string(), completed_at.to_rfc3339()],
        )?;

        tracing::debug!("Recorded completion for habit {}", habit_id);
        Ok(())
    }

    /// All completion timestamps for a habit, in no guaranteed order
    fn completions_for_habit(
        &self,
        habit_id: &HabitId,
    ) -> Result<Vec<DateTime<Utc>>, StorageError> {
        let mut stmt = self
            .conn
            .prepare("SELECT completed_at FROM completions WHERE habit_id = ?1")?;

        let rows = stmt.query_map(params![habit_id.to_string()], |row| {
            row.get::<_, String>(0)
        })?;

        let mut timestamps = Vec::new();
        for row in rows {
            timestamps.push(parse_timestamp(&row?)?);
        }

        Ok(timestamps)
    }
}
