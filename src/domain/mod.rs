/// Domain module containing core business logic and data types
///
/// This module defines the core entities (Habit, CompletionLedger) and their
/// validation rules. These types represent the fundamental concepts in the
/// habit tracking system.

pub mod completion;
pub mod habit;
pub mod types;

// Re-export public types for easy access
pub use completion::*;
pub use habit::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid periodicity: {0}")]
    InvalidPeriodicity(String),
}
