/// Core types and enums used throughout the domain layer
///
/// This module defines the fundamental types like HabitType and Frequency
/// that are used by HabitEntry, HabitConfig, and the computation layers.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// How a habit is tracked
///
/// The tracking type decides what counts as a completed day and whether
/// value totals appear in the metrics summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitType {
    /// A simple done/not-done toggle
    Completion,
    /// Time spent, in some unit (e.g., minutes)
    Duration,
    /// A counted amount (e.g., pages, cups)
    Quantity,
}

impl HabitType {
    /// Whether this type carries a numeric value worth aggregating
    pub fn tracks_value(&self) -> bool {
        matches!(self, HabitType::Duration | HabitType::Quantity)
    }
}

/// How often a habit should be performed
///
/// The frequency decides which days count as scheduled. For `Weekly` the
/// distinction is subtle: every active day is eligible for completion
/// (the grid shows them all), and only the success scoring in the metrics
/// aggregator changes, evaluating the target per 7-day window instead of
/// per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    /// Every single day
    Daily,
    /// A target number of completions per week (1-7), no fixed days
    Weekly(u8),
    /// Specific days of the week (e.g., Monday, Wednesday, Friday)
    Custom(Vec<Weekday>),
}

impl Frequency {
    /// Validate that a frequency value is reasonable
    ///
    /// An invalid configuration must fail here rather than silently
    /// matching no days, which would corrupt streak computation.
    pub fn validate(&self) -> Result<(), DomainError> {
        match self {
            Frequency::Weekly(target) => {
                if *target == 0 || *target > 7 {
                    return Err(DomainError::InvalidFrequency(format!(
                        "weekly target must be 1-7, got {}",
                        target
                    )));
                }
            }
            Frequency::Custom(days) => {
                if days.is_empty() {
                    return Err(DomainError::InvalidFrequency(
                        "custom frequency must specify at least one weekday".to_string(),
                    ));
                }
                if days.len() > 7 {
                    return Err(DomainError::InvalidFrequency(
                        "custom frequency cannot have more than 7 weekdays".to_string(),
                    ));
                }
            }
            Frequency::Daily => {}
        }
        Ok(())
    }

    /// Check if a date is a scheduled day for this frequency
    ///
    /// Dates before `start_date` never match: the habit is not active yet.
    pub fn matches(&self, date: NaiveDate, start_date: Option<NaiveDate>) -> bool {
        if let Some(start) = start_date {
            if date < start {
                return false;
            }
        }

        match self {
            Frequency::Daily => true,
            Frequency::Custom(days) => days.contains(&date.weekday()),
            // Weekly habits have no fixed days: every active day is
            // eligible, and the target is scored per week-window by the
            // metrics aggregator.
            Frequency::Weekly(_) => true,
        }
    }
}
