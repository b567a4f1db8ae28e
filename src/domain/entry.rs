/// HabitEntry entity for tracking habit completions
///
/// This module defines the HabitEntry struct that represents a single
/// record for a habit on a specific day, with optional value and note.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, HabitType};

/// Upper bound on entry note length
const MAX_NOTE_LEN: usize = 500;

/// A record for a habit on a specific day
///
/// The engine treats the entry set as an immutable input per computation;
/// dates are unique within a habit's entries. For duration and quantity
/// habits the value holds the amount achieved that day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitEntry {
    /// Which calendar day this record is for
    pub date: NaiveDate,
    /// Amount achieved (duration/quantity habits)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// User's note about this day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl HabitEntry {
    /// Create a new habit entry with validation
    pub fn new(
        date: NaiveDate,
        value: Option<f64>,
        note: Option<String>,
    ) -> Result<Self, DomainError> {
        let entry = Self { date, value, note };
        entry.validate()?;
        Ok(entry)
    }

    /// Shorthand for a bare completion record with no value or note
    pub fn on(date: NaiveDate) -> Self {
        Self {
            date,
            value: None,
            note: None,
        }
    }

    /// Validate the entry's fields
    ///
    /// Deserialized entries bypass `new`, so the parsing boundary calls
    /// this on each entry it accepts.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(value) = self.value {
            if !value.is_finite() {
                return Err(DomainError::InvalidValue {
                    message: format!("entry value for {} must be finite", self.date),
                });
            }
            if value < 0.0 {
                return Err(DomainError::InvalidValue {
                    message: format!("entry value for {} cannot be negative", self.date),
                });
            }
        }

        if let Some(note) = &self.note {
            if note.len() > MAX_NOTE_LEN {
                return Err(DomainError::InvalidValue {
                    message: format!(
                        "note for {} cannot be longer than {} characters",
                        self.date, MAX_NOTE_LEN
                    ),
                });
            }
        }

        Ok(())
    }

    /// Whether this entry counts as a completed day for the given type
    ///
    /// Completion habits tick on the entry's mere existence; duration and
    /// quantity habits tick only when a positive value was recorded.
    pub fn is_ticked(&self, habit_type: HabitType) -> bool {
        match habit_type {
            HabitType::Completion => true,
            HabitType::Duration | HabitType::Quantity => self.value.map_or(false, |v| v > 0.0),
        }
    }

    /// Check if this entry has a non-empty note
    pub fn has_note(&self) -> bool {
        self.note.as_deref().map_or(false, |n| !n.trim().is_empty())
    }
}
