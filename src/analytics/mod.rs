/// Analytics engine for deriving streak and break statistics
///
/// This module exposes the derivation engine and the completion admission
/// gate. Both are pure: they take the ledger and a single `now` captured by
/// the caller, and never touch storage or the clock themselves.

pub mod admission;
pub mod stats;

pub use admission::{admit, AdmissionOutcome};
pub use stats::{compute_stats, HabitStats};

use chrono::{DateTime, Utc};

use crate::domain::{CompletionLedger, Habit};

/// Stateless facade over the derivation engine
///
/// Stats are recomputed from the full ledger on every read. That is O(n) in
/// the habit's completion count, cheap at personal-tracker scale, and keeps
/// every read consistent with the ledger. Callers that want caching can add
/// it behind this same contract.
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self
    }

    /// Derive statistics for a habit from its raw completion timestamps
    pub fn stats_for_habit(
        &self,
        habit: &Habit,
        timestamps: Vec<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> HabitStats {
        let ledger = CompletionLedger::from_unordered(timestamps);
        compute_stats(habit.periodicity, &ledger, now)
    }
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self::new()
    }
}
