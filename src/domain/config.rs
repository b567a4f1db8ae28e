/// Habit configuration and the frontmatter resolution boundary
///
/// This module defines the loosely-typed `HabitFrontmatter` record the
/// host hands over (every field optional, dates as strings) and the fully
/// resolved `HabitConfig` the computation layers consume. Defaults are
/// applied exactly once, here; downstream code never checks "is this
/// field present".

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::domain::{DomainError, Frequency, HabitEntry, HabitType};

/// Global fallbacks applied when frontmatter leaves a field out
///
/// These mirror the tracker's plugin-level settings: completion habits on
/// a daily schedule, with streak freezes enabled and capped at 7 days.
#[derive(Debug, Clone, PartialEq)]
pub struct Defaults {
    pub habit_type: HabitType,
    pub frequency: Frequency,
    pub max_freeze_days: u32,
    pub freezes_enabled: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            habit_type: HabitType::Completion,
            frequency: Frequency::Daily,
            max_freeze_days: 7,
            freezes_enabled: true,
        }
    }
}

/// Frequency block as it appears in frontmatter
///
/// Weekday numbers use 0 = Sunday through 6 = Saturday.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FrequencySpec {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub target: Option<u8>,
    pub weekdays: Option<Vec<u8>>,
}

impl FrequencySpec {
    /// Resolve the raw block into a validated `Frequency`
    pub fn resolve(&self) -> Result<Frequency, DomainError> {
        let frequency = match self.kind.as_deref() {
            None | Some("daily") => Frequency::Daily,
            Some("weekly") => Frequency::Weekly(self.target.unwrap_or(7)),
            Some("custom") => {
                let numbers = self.weekdays.as_deref().unwrap_or(&[]);
                let weekdays = numbers
                    .iter()
                    .map(|n| dates::weekday_from_index(*n))
                    .collect::<Result<Vec<_>, _>>()?;
                Frequency::Custom(weekdays)
            }
            Some(other) => {
                return Err(DomainError::InvalidFrequency(format!(
                    "unknown frequency type: {}",
                    other
                )))
            }
        };

        frequency.validate()?;
        Ok(frequency)
    }
}

/// Habit file frontmatter as stored by the host
///
/// All fields are optional; `resolve` turns this into a `HabitConfig`
/// with defaults applied and dates parsed, failing fast on anything
/// malformed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HabitFrontmatter {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[serde(rename = "type")]
    pub habit_type: Option<HabitType>,
    pub unit: Option<String>,
    pub goal: Option<f64>,
    pub max_value: Option<f64>,
    pub frequency: Option<FrequencySpec>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub frozen_dates: Option<Vec<String>>,
    pub max_freeze_days: Option<u32>,
    pub ignore: Option<bool>,
    pub entries: Vec<HabitEntry>,
}

impl HabitFrontmatter {
    /// Resolve raw frontmatter into a complete `HabitConfig`
    pub fn resolve(&self, defaults: &Defaults) -> Result<HabitConfig, DomainError> {
        let habit_type = self.habit_type.unwrap_or(defaults.habit_type);

        let frequency = match &self.frequency {
            Some(spec) => spec.resolve()?,
            None => {
                defaults.frequency.validate()?;
                defaults.frequency.clone()
            }
        };

        let start_date = self
            .start_date
            .as_deref()
            .map(dates::parse_day)
            .transpose()?;
        let end_date = self.end_date.as_deref().map(dates::parse_day).transpose()?;
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                return Err(DomainError::InvalidDate(format!(
                    "end date {} precedes start date {}",
                    end, start
                )));
            }
        }

        let frozen_dates = self
            .frozen_dates
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .map(|s| dates::parse_day(s))
            .collect::<Result<BTreeSet<_>, _>>()?;

        let max_freeze_days = if defaults.freezes_enabled {
            self.max_freeze_days.unwrap_or(defaults.max_freeze_days)
        } else {
            0
        };

        for value in [self.goal, self.max_value].into_iter().flatten() {
            if !value.is_finite() || value <= 0.0 {
                return Err(DomainError::InvalidValue {
                    message: "goal and maxValue must be positive numbers".to_string(),
                });
            }
        }

        Ok(HabitConfig {
            habit_type,
            unit: self.unit.clone(),
            goal: self.goal,
            max_value: self.max_value,
            frequency,
            start_date,
            end_date,
            frozen_dates,
            max_freeze_days,
        })
    }
}

/// Fully resolved habit configuration
///
/// Every field is concrete by the time computation sees it. `frozen_dates`
/// are days explicitly exempted from breaking a streak even when
/// incomplete, up to `max_freeze_days` consecutive times.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitConfig {
    pub habit_type: HabitType,
    pub unit: Option<String>,
    pub goal: Option<f64>,
    pub max_value: Option<f64>,
    pub frequency: Frequency,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub frozen_dates: BTreeSet<NaiveDate>,
    pub max_freeze_days: u32,
}

impl HabitConfig {
    /// A minimal config for the given type and frequency, no bounds set
    pub fn new(habit_type: HabitType, frequency: Frequency) -> Self {
        Self {
            habit_type,
            unit: None,
            goal: None,
            max_value: None,
            frequency,
            start_date: None,
            end_date: None,
            frozen_dates: BTreeSet::new(),
            max_freeze_days: 0,
        }
    }

    /// Whether a date falls inside the configured start/end bounds
    pub fn in_configured_range(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.start_date {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if date > end {
                return false;
            }
        }
        true
    }

    /// Whether a date is a scheduled day: in bounds and matching the
    /// frequency pattern
    pub fn is_scheduled(&self, date: NaiveDate) -> bool {
        self.in_configured_range(date) && self.frequency.matches(date, self.start_date)
    }
}
