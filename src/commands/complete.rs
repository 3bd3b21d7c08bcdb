/// Command for marking a habit as completed

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analytics::{admit, compute_stats, AdmissionOutcome, HabitStats};
use crate::commands::CommandError;
use crate::domain::CompletionLedger;
use crate::storage::HabitStore;

/// Parameters for completing a habit
#[derive(Debug, Deserialize)]
pub struct CompleteHabitParams {
    pub name: String,
}

/// Response from completing a habit
#[derive(Debug, Serialize)]
pub struct CompleteHabitResponse {
    pub outcome: AdmissionOutcome,
    pub stats: HabitStats,
    pub message: String,
}

/// Mark a habit as completed now
///
/// Runs the admission gate against the most recent ledger entry. On
/// acceptance the completion is appended and stats are recomputed from the
/// updated ledger; on rejection the ledger is left untouched and the
/// response carries the unchanged stats.
pub fn complete_habit<S: HabitStore>(
    store: &S,
    params: CompleteHabitParams,
    now: DateTime<Utc>,
) -> Result<CompleteHabitResponse, CommandError> {
    let habit = store.get_habit_by_name(&params.name)?;

    let ledger = CompletionLedger::from_unordered(store.completions_for_habit(&habit.id)?);
    let outcome = admit(ledger.latest(), now);

    match outcome {
        AdmissionOutcome::Accepted => {
            store.add_completion(&habit.id, now)?;

            let updated =
                CompletionLedger::from_unordered(store.completions_for_habit(&habit.id)?);
            let stats = compute_stats(habit.periodicity, &updated, now);

            Ok(CompleteHabitResponse {
                outcome,
                stats,
                message: format!(
                    "Completed '{}'. Current streak: {} {}",
                    habit.name,
                    stats.current_streak,
                    period_noun(habit.periodicity.gap_limit_days(), stats.current_streak)
                ),
            })
        }
        AdmissionOutcome::AlreadyCompletedToday => {
            let stats = compute_stats(habit.periodicity, &ledger, now);

            Ok(CompleteHabitResponse {
                outcome,
                stats,
                message: format!("'{}' was already completed today", habit.name),
            })
        }
    }
}

fn period_noun(gap_limit_days: i64, count: u32) -> &'static str {
    match (gap_limit_days, count) {
        (7, 1) => "week",
        (7, _) => "weeks",
        (_, 1) => "day",
        (_, _) => "days",
    }
}
