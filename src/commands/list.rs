/// Command for listing habits with their derived statistics
///
/// Supports the analysis views: filter by periodicity and sort by name or
/// by any of the derived statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analytics::{compute_stats, HabitStats};
use crate::commands::CommandError;
use crate::domain::{CompletionLedger, Periodicity};
use crate::storage::HabitStore;

/// Parameters for listing habits
#[derive(Debug, Default, Deserialize)]
pub struct ListHabitsParams {
    /// Restrict to one periodicity ("daily"/"weekly"), None for all
    pub periodicity: Option<String>,
    /// "name", "current_streak", "longest_streak" or "break_count";
    /// defaults to name
    pub sort_by: Option<String>,
}

/// One habit with its derived statistics
#[derive(Debug, Serialize)]
pub struct HabitRow {
    pub habit_id: String,
    pub name: String,
    pub periodicity: String,
    #[serde(flatten)]
    pub stats: HabitStats,
}

/// Response from listing habits
#[derive(Debug, Serialize)]
pub struct ListHabitsResponse {
    pub habits: Vec<HabitRow>,
    pub message: String,
}

/// Sort orders for the habit list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortOrder {
    Name,
    CurrentStreak,
    LongestStreak,
    BreakCount,
}

impl SortOrder {
    fn parse(value: Option<&str>) -> Result<Self, CommandError> {
        match value {
            None | Some("name") => Ok(SortOrder::Name),
            Some("current_streak") => Ok(SortOrder::CurrentStreak),
            Some("longest_streak") => Ok(SortOrder::LongestStreak),
            Some("break_count") => Ok(SortOrder::BreakCount),
            Some(other) => Err(CommandError::InvalidArgument(format!(
                "Unknown sort order '{}'. Valid options: name, current_streak, longest_streak, break_count",
                other
            ))),
        }
    }
}

/// List habits with stats, filtered and sorted
///
/// Stats are recomputed from each habit's full ledger on every call.
pub fn list_habits<S: HabitStore>(
    store: &S,
    params: ListHabitsParams,
    now: DateTime<Utc>,
) -> Result<ListHabitsResponse, CommandError> {
    let filter = match params.periodicity.as_deref() {
        Some(value) => Some(value.parse::<Periodicity>()?),
        None => None,
    };
    let sort_order = SortOrder::parse(params.sort_by.as_deref())?;

    let mut rows = Vec::new();
    for habit in store.list_habits()? {
        if let Some(wanted) = filter {
            if habit.periodicity != wanted {
                continue;
            }
        }

        let ledger = CompletionLedger::from_unordered(store.completions_for_habit(&habit.id)?);
        let stats = compute_stats(habit.periodicity, &ledger, now);

        rows.push(HabitRow {
            habit_id: habit.id.to_string(),
            name: habit.name,
            periodicity: habit.periodicity.as_str().to_string(),
            stats,
        });
    }

    match sort_order {
        SortOrder::Name => rows.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        SortOrder::CurrentStreak => {
            rows.sort_by(|a, b| b.stats.current_streak.cmp(&a.stats.current_streak))
        }
        SortOrder::LongestStreak => {
            rows.sort_by(|a, b| b.stats.longest_streak.cmp(&a.stats.longest_streak))
        }
        SortOrder::BreakCount => {
            rows.sort_by(|a, b| b.stats.break_count.cmp(&a.stats.break_count))
        }
    }

    let message = render_table(&rows);
    Ok(ListHabitsResponse {
        habits: rows,
        message,
    })
}

fn render_table(rows: &[HabitRow]) -> String {
    if rows.is_empty() {
        return "No habits found. Create your first habit to get started!".to_string();
    }

    let mut lines = vec![format!(
        "{:<30} {:<8} {:>10} {:>8} {:>8} {:>7}",
        "Name", "Cadence", "Last done", "Streak", "Best", "Breaks"
    )];

    for row in rows {
        let last = match row.stats.days_since_last_completion {
            None => "never".to_string(),
            Some(0) => "today".to_string(),
            Some(1) => "1 day ago".to_string(),
            Some(days) => format!("{} days ago", days),
        };
        lines.push(format!(
            "{:<30} {:<8} {:>10} {:>8} {:>8} {:>7}",
            row.name,
            row.periodicity,
            last,
            row.stats.current_streak,
            row.stats.longest_streak,
            row.stats.break_count
        ));
    }

    lines.join("\n")
}
