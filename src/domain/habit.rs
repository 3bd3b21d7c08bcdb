/// Habit entity and related functionality
///
/// This module defines the core Habit struct that represents a recurring
/// habit the user wants to track, along with its validation rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, HabitId, Periodicity};

/// A habit represents something the user wants to do regularly
///
/// Each habit has a name, a periodicity (daily or weekly), and a creation
/// timestamp. Names are unique case-insensitively across all habits; the
/// storage layer enforces the uniqueness, this type enforces the shape.
/// Periodicity is immutable after creation - a habit is only ever created
/// or deleted, never reconfigured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier for this habit
    pub id: HabitId,
    /// Display name (e.g., "Morning Run", "Weekly Review")
    pub name: String,
    /// Whether the habit repeats daily or weekly
    pub periodicity: Periodicity,
    /// When this habit was created
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Create a new habit with validation
    pub fn new(
        name: String,
        periodicity: Periodicity,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;

        Ok(Self {
            id: HabitId::new(),
            name: name.trim().to_string(),
            periodicity,
            created_at,
        })
    }

    /// Create a habit from existing data (used when loading from the database)
    ///
    /// This constructor assumes data is already validated and is mainly used
    /// by the storage layer when loading habits from the database.
    pub fn from_existing(
        id: HabitId,
        name: String,
        periodicity: Periodicity,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            periodicity,
            created_at,
        }
    }

    /// Validate habit name according to business rules
    fn validate_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string(),
            ));
        }

        if trimmed.len() > 100 {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be longer than 100 characters".to_string(),
            ));
        }

        Ok(())
    }
}
