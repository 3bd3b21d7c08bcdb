/// Demo data seeding
///
/// This module populates a fresh database with example habits and four
/// months of back-dated completion history, so the analytics views have
/// streaks and breaks to show right away.

use chrono::{DateTime, Datelike, Duration, Utc, Weekday};

use crate::domain::{Habit, Periodicity};
use crate::storage::{HabitStore, StorageError};

/// How far back the generated history reaches
const HISTORY_DAYS: i64 = 120;

/// Example habits created by the seeder
const SEED_HABITS: [(&str, Periodicity); 5] = [
    ("Daily Exercise", Periodicity::Daily),
    ("Weekly Meditation", Periodicity::Weekly),
    ("Daily Reading", Periodicity::Daily),
    ("Daily Breakfast", Periodicity::Daily),
    ("Weekly Calling Mom", Periodicity::Weekly),
];

/// Seed the store with example habits and history
///
/// Daily habits get one completion per day and weekly habits one per Friday,
/// over the last four months. A fixed pattern of days is skipped so each
/// habit shows a few breaks; the pattern is deterministic so seeded
/// analytics are reproducible. Seeding a database that already contains
/// habits is a no-op.
pub fn seed_demo_data<S: HabitStore>(store: &S, now: DateTime<Utc>) -> Result<usize, StorageError> {
    if !store.list_habits()?.is_empty() {
        tracing::info!("Database already contains habits, skipping demo seed");
        return Ok(0);
    }

    let start = now - Duration::days(HISTORY_DAYS);

    for (index, (name, periodicity)) in SEED_HABITS.iter().enumerate() {
        let habit = Habit::new((*name).to_string(), *periodicity, start)
            .map_err(|e| StorageError::Migration(format!("Invalid seed habit: {}", e)))?;
        store.create_habit(&habit)?;

        for offset in 0..=HISTORY_DAYS {
            let day = start + Duration::days(offset);

            let scheduled = match periodicity {
                Periodicity::Daily => true,
                Periodicity::Weekly => day.weekday() == Weekday::Fri,
            };
            if !scheduled || skip_day(index, offset) {
                continue;
            }

            store.add_completion(&habit.id, day)?;
        }
    }

    tracing::info!("Seeded {} demo habits with {} days of history", SEED_HABITS.len(), HISTORY_DAYS);
    Ok(SEED_HABITS.len())
}

/// Fixed gap pattern: roughly one day in seventeen is skipped, staggered
/// per habit so the seeded habits don't all break on the same days
fn skip_day(habit_index: usize, offset: i64) -> bool {
    (offset + habit_index as i64 * 5) % 17 == 0
}
