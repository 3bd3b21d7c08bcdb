/// User-facing commands for habit management
///
/// This module contains the operations the presentation layer calls to
/// interact with the habit tracker. Each command is a plain function,
/// generic over the store, taking a `now` captured once by the caller.

pub mod complete;
pub mod create;
pub mod delete;
pub mod list;
pub mod status;

// Re-export command functions for easy access
pub use complete::*;
pub use create::*;
pub use delete::*;
pub use list::*;
pub use status::*;

use thiserror::Error;

use crate::domain::DomainError;
use crate::storage::StorageError;

/// Errors that can occur while executing a command
#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
