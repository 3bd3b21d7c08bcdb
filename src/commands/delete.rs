/// Command for deleting a habit

use serde::{Deserialize, Serialize};

use crate::commands::CommandError;
use crate::storage::HabitStore;

/// Parameters for deleting a habit
#[derive(Debug, Deserialize)]
pub struct DeleteHabitParams {
    pub name: String,
}

/// Response from deleting a habit
#[derive(Debug, Serialize)]
pub struct DeleteHabitResponse {
    pub message: String,
}

/// Delete a habit by name, cascading its completion ledger
pub fn delete_habit<S: HabitStore>(
    store: &S,
    params: DeleteHabitParams,
) -> Result<DeleteHabitResponse, CommandError> {
    let habit = store.get_habit_by_name(&params.name)?;
    store.delete_habit(&habit.id)?;

    Ok(DeleteHabitResponse {
        message: format!("Deleted habit '{}' and its completion history", habit.name),
    })
}
