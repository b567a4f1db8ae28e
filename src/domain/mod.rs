/// Domain module containing core business logic and data types
///
/// This module defines the core entities (HabitEntry, HabitConfig,
/// Frequency) and their validation rules, plus the streak calculator.
/// These types represent the fundamental concepts of the habit grid.

pub mod config;
pub mod entry;
pub mod streak;
pub mod types;

// Re-export public types for easy access
pub use config::*;
pub use entry::*;
pub use streak::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid frequency: {0}")]
    InvalidFrequency(String),

    #[error("Invalid value: {message}")]
    InvalidValue { message: String },

    #[error("Duplicate entry for {0}")]
    DuplicateEntry(chrono::NaiveDate),

    #[error("Parse error: {0}")]
    Parse(String),
}
