/// Completion ledger for a habit's recorded completions
///
/// This module defines the CompletionLedger, the ordered view over the raw
/// completion timestamps the storage layer returns for one habit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ordered sequence of completion timestamps for a single habit
///
/// Storage makes no ordering promise, and raw histories can arrive unsorted
/// or with near-duplicate timestamps, so establishing ascending order is the
/// ledger's first responsibility. Everything downstream (the stats engine,
/// the admission gate) reads from this type rather than from raw rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionLedger {
    timestamps: Vec<DateTime<Utc>>,
}

impl CompletionLedger {
    /// Build a ledger from timestamps in any order
    pub fn from_unordered(mut timestamps: Vec<DateTime<Utc>>) -> Self {
        timestamps.sort_unstable();
        Self { timestamps }
    }

    /// Build an empty ledger (a newly created habit has no history)
    pub fn empty() -> Self {
        Self {
            timestamps: Vec::new(),
        }
    }

    /// Completion timestamps in chronological order
    pub fn ascending(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    /// Completion timestamps newest-first
    pub fn descending(&self) -> impl Iterator<Item = &DateTime<Utc>> {
        self.timestamps.iter().rev()
    }

    /// The most recent completion, if any
    pub fn latest(&self) -> Option<DateTime<Utc>> {
        self.timestamps.last().copied()
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}
