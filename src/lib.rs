/// Public library interface for the habit tracker
///
/// This module exports the tracker service and the public types used by
/// the CLI and by tests.

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use thiserror::Error;

// Internal modules
mod analytics;
mod commands;
mod domain;
mod storage;

// Re-export public modules and types
pub use analytics::{admit, compute_stats, AdmissionOutcome, AnalyticsEngine, HabitStats};
pub use commands::*;
pub use domain::*;
pub use storage::seed::seed_demo_data;
pub use storage::{HabitStore, SqliteStore, StorageError};

/// Errors that can occur during tracker operation
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] storage::StorageError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error(transparent)]
    Command(#[from] commands::CommandError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main habit tracker service
///
/// This wires the SQLite store to the analytics engine. Commands go through
/// the store; statistics are always recomputed from the ledger on read.
pub struct HabitTracker {
    store: SqliteStore,
    analytics: AnalyticsEngine,
}

impl HabitTracker {
    /// Open a habit tracker over the database at the given path
    ///
    /// This will initialize the SQLite database with the required schema
    /// if it doesn't already exist.
    pub fn open(db_path: PathBuf) -> Result<Self, AppError> {
        tracing::info!("Opening habit tracker with database: {:?}", db_path);

        let store = SqliteStore::new(db_path)?;
        let analytics = AnalyticsEngine::new();

        Ok(Self { store, analytics })
    }

    /// Derive current statistics for a habit by name
    pub fn stats_for(&self, name: &str, now: DateTime<Utc>) -> Result<HabitStats, AppError> {
        let habit = self.store.get_habit_by_name(name)?;
        let timestamps = self.store.completions_for_habit(&habit.id)?;
        Ok(self.analytics.stats_for_habit(&habit, timestamps, now))
    }

    /// Get a reference to the store
    pub fn store(&self) -> &SqliteStore {
        &self.store
    }

    /// Get a reference to the analytics engine
    pub fn analytics(&self) -> &AnalyticsEngine {
        &self.analytics
    }
}
