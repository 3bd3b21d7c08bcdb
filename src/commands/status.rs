/// Command for reporting one habit's status in detail

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analytics::{compute_stats, HabitStats};
use crate::commands::CommandError;
use crate::domain::CompletionLedger;
use crate::storage::HabitStore;

/// Parameters for checking habit status
#[derive(Debug, Deserialize)]
pub struct StatusParams {
    pub name: String,
}

/// Response from checking habit status
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub habit_id: String,
    pub name: String,
    pub periodicity: String,
    pub total_completions: usize,
    pub stats: HabitStats,
    pub message: String,
}

/// Report the derived statistics for a single habit
pub fn habit_status<S: HabitStore>(
    store: &S,
    params: StatusParams,
    now: DateTime<Utc>,
) -> Result<StatusResponse, CommandError> {
    let habit = store.get_habit_by_name(&params.name)?;
    let ledger = CompletionLedger::from_unordered(store.completions_for_habit(&habit.id)?);
    let stats = compute_stats(habit.periodicity, &ledger, now);

    let last_line = match stats.days_since_last_completion {
        None => "Never completed".to_string(),
        Some(0) => "Last completed today".to_string(),
        Some(1) => "Last completed 1 day ago".to_string(),
        Some(days) => format!("Last completed {} days ago", days),
    };

    let message = format!(
        "{} ({})\n  {}\n  Current streak: {} | Longest streak: {} | Breaks: {} | Completions: {}",
        habit.name,
        habit.periodicity,
        last_line,
        stats.current_streak,
        stats.longest_streak,
        stats.break_count,
        ledger.len()
    );

    Ok(StatusResponse {
        habit_id: habit.id.to_string(),
        name: habit.name,
        periodicity: habit.periodicity.as_str().to_string(),
        total_completions: ledger.len(),
        stats,
        message,
    })
}
