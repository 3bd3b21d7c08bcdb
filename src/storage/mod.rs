/// Storage layer for persisting habit data
///
/// This module handles all database operations using SQLite. It provides
/// a clean interface for storing and retrieving habits and their
/// completion timestamps.

pub mod migrations;
pub mod seed;
pub mod sqlite;

// Re-export the main storage types
pub use sqlite::*;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::{Habit, HabitId};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Habit not found: {habit}")]
    HabitNotFound { habit: String },

    #[error("A habit named '{name}' already exists")]
    DuplicateName { name: String },

    #[error("Malformed timestamp in stored data: {value}")]
    MalformedTimestamp { value: String },

    #[error("Migration error: {0}")]
    Migration(String),
}

/// Trait defining the storage interface for habits
///
/// Callers receive this as an injected dependency; there is no process-wide
/// connection state. It also allows swapping SQLite for another backend
/// while keeping the same interface.
///
/// Append-then-recompute must stay atomic per habit with respect to
/// concurrent admissions; the SQLite implementation serializes writes on
/// its single connection.
pub trait HabitStore {
    /// Create a new habit, rejecting case-insensitive name collisions
    fn create_habit(&self, habit: &Habit) -> Result<(), StorageError>;

    /// Get a habit by ID
    fn get_habit(&self, habit_id: &HabitId) -> Result<Habit, StorageError>;

    /// Get a habit by name, matched case-insensitively
    fn get_habit_by_name(&self, name: &str) -> Result<Habit, StorageError>;

    /// Delete a habit along with its entire completion ledger
    fn delete_habit(&self, habit_id: &HabitId) -> Result<(), StorageError>;

    /// List all habits
    fn list_habits(&self) -> Result<Vec<Habit>, StorageError>;

    /// Append one completion timestamp to a habit's ledger
    fn add_completion(
        &self,
        habit_id: &HabitId,
        completed_at: DateTime<Utc>,
    ) -> Result<(), StorageError>;

    /// All completion timestamps for a habit; callers must not rely on the
    /// returned order
    fn completions_for_habit(
        &self,
        habit_id: &HabitId,
    ) -> Result<Vec<DateTime<Utc>>, StorageError>;
}
