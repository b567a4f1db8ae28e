/// Display-entry builder
///
/// Composes the date utilities, frequency matcher, and streak calculator
/// into the ordered per-day sequence the renderer consumes. One annotated
/// record per requested date, recomputed on every call and never
/// persisted.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::dates;
use crate::domain::{scheduled_history, streak_progression, HabitConfig, HabitEntry};

/// The span of days a grid displays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Newest day first when set; never changes which dates are included
    pub reverse: bool,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate, reverse: bool) -> Self {
        Self {
            start,
            end,
            reverse,
        }
    }

    /// A range of `days` days ending at `end`, inclusive
    pub fn ending_at(end: NaiveDate, days: u32, reverse: bool) -> Self {
        let span = days.saturating_sub(1) as i64;
        Self {
            start: end - chrono::Duration::days(span),
            end,
            reverse,
        }
    }

    /// Dates in display order
    pub fn days(&self) -> Vec<NaiveDate> {
        dates::day_range(self.start, self.end, self.reverse)
    }

    /// Number of calendar days covered, 0 when `start > end`
    pub fn num_days(&self) -> u32 {
        if self.start > self.end {
            0
        } else {
            (dates::days_between(self.start, self.end) + 1) as u32
        }
    }
}

/// One grid cell: a date with everything the renderer needs to draw it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayEntry {
    pub date: NaiveDate,
    /// Completed on this day, per the habit's tracking type
    pub ticked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Running streak as of this date
    pub streak: u32,
    /// Date is in the config's frozen set
    pub frozen: bool,
    /// Date falls before the habit's start date or after its end date
    pub outside_range: bool,
    /// Date is a scheduled day per the frequency pattern
    pub matches_frequency: bool,
}

/// Build the annotated day sequence for a habit over a display range
///
/// The `streak` on each cell is the current streak of the full habit
/// history up to and including that date. The progression is computed in
/// one forward pass over the history and sampled per cell, so unscheduled
/// and future days carry the last scheduled day's value forward.
pub fn build_display(
    entries: &[HabitEntry],
    config: &HabitConfig,
    range: &DateRange,
    today: NaiveDate,
) -> Vec<DisplayEntry> {
    debug!(
        start = %range.start,
        end = %range.end,
        reverse = range.reverse,
        entries = entries.len(),
        "building display entries"
    );

    let index: BTreeMap<NaiveDate, &HabitEntry> = entries.iter().map(|e| (e.date, e)).collect();

    let history = scheduled_history(entries, config, today);
    let progression = streak_progression(&history, &config.frozen_dates, config.max_freeze_days);

    let streak_at = |date: NaiveDate| -> u32 {
        let idx = history.partition_point(|d| d.date <= date);
        if idx == 0 {
            0
        } else {
            progression[idx - 1]
        }
    };

    range
        .days()
        .into_iter()
        .map(|date| {
            let entry = index.get(&date);
            DisplayEntry {
                date,
                ticked: entry.map_or(false, |e| e.is_ticked(config.habit_type)),
                value: entry.and_then(|e| e.value),
                note: entry.and_then(|e| e.note.clone()),
                streak: streak_at(date),
                frozen: config.frozen_dates.contains(&date),
                outside_range: !config.in_configured_range(date),
                matches_frequency: config.frequency.matches(date, config.start_date),
            }
        })
        .collect()
}
