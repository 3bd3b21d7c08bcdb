/// Command for creating new habits

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::commands::CommandError;
use crate::domain::{Habit, Periodicity};
use crate::storage::HabitStore;

/// Parameters for creating a new habit
#[derive(Debug, Deserialize)]
pub struct CreateHabitParams {
    pub name: String,
    pub periodicity: String,
}

/// Response from creating a habit
#[derive(Debug, Serialize)]
pub struct CreateHabitResponse {
    pub habit_id: String,
    pub message: String,
}

/// Create a new habit using the provided store
///
/// The store rejects names that collide case-insensitively with an
/// existing habit.
pub fn create_habit<S: HabitStore>(
    store: &S,
    params: CreateHabitParams,
    now: DateTime<Utc>,
) -> Result<CreateHabitResponse, CommandError> {
    let periodicity: Periodicity = params.periodicity.parse()?;
    let habit = Habit::new(params.name, periodicity, now)?;

    store.create_habit(&habit)?;

    Ok(CreateHabitResponse {
        habit_id: habit.id.to_string(),
        message: format!("Created {} habit '{}'", habit.periodicity, habit.name),
    })
}
