/// Streak calculation over scheduled days
///
/// This module computes current and longest streaks from the
/// chronologically ascending sequence of scheduled days, honoring
/// freeze-day tolerance. Unscheduled days never appear in the input:
/// they neither extend nor break a streak.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{HabitConfig, HabitEntry};

/// One scheduled day with its completion flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledDay {
    pub date: NaiveDate,
    pub ticked: bool,
}

/// Result of a streak computation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StreakSummary {
    /// Consecutive run surviving through the most recent scheduled day
    pub current: u32,
    /// Best run ever observed
    pub longest: u32,
}

/// Walk the day sequence once, reporting the running streak after each
/// day to `on_day` and returning the summary.
///
/// A ticked day extends the run and clears the freeze counter. A frozen
/// day within tolerance preserves the run without extending it. Anything
/// else breaks the run. `current` is "live" only if the run survives
/// through the final day; a broken trailing day yields 0.
fn walk(
    days: &[ScheduledDay],
    frozen: &BTreeSet<NaiveDate>,
    max_freeze_days: u32,
    mut on_day: impl FnMut(u32),
) -> StreakSummary {
    let mut run = 0u32;
    let mut freeze_run = 0u32;
    let mut longest = 0u32;

    for day in days {
        if day.ticked {
            run += 1;
            freeze_run = 0;
        } else if frozen.contains(&day.date) && freeze_run < max_freeze_days {
            // Streak preserved, not extended
            freeze_run += 1;
        } else {
            longest = longest.max(run);
            run = 0;
            freeze_run = 0;
        }
        on_day(run);
    }

    StreakSummary {
        current: run,
        longest: longest.max(run),
    }
}

/// Compute current and longest streaks for a scheduled-day sequence
pub fn compute_streaks(
    days: &[ScheduledDay],
    frozen: &BTreeSet<NaiveDate>,
    max_freeze_days: u32,
) -> StreakSummary {
    walk(days, frozen, max_freeze_days, |_| {})
}

/// Running streak value after each day, in input order
///
/// `progression[i]` equals `compute_streaks(&days[..=i], ..).current`,
/// but the whole vector comes out of one forward pass instead of a
/// per-prefix recomputation.
pub fn streak_progression(
    days: &[ScheduledDay],
    frozen: &BTreeSet<NaiveDate>,
    max_freeze_days: u32,
) -> Vec<u32> {
    let mut progression = Vec::with_capacity(days.len());
    walk(days, frozen, max_freeze_days, |run| progression.push(run));
    progression
}

/// Assemble the full-history scheduled-day sequence for a habit
///
/// Covers every scheduled day from the habit's start (its configured
/// start date or its earliest entry, whichever is known and earlier)
/// through today, clamped by the configured end date. This is the input
/// both streak numbers and per-day streak annotations are derived from.
pub fn scheduled_history(
    entries: &[HabitEntry],
    config: &HabitConfig,
    today: NaiveDate,
) -> Vec<ScheduledDay> {
    let first_entry = entries.iter().map(|e| e.date).min();
    let start = match (config.start_date, first_entry) {
        (Some(configured), Some(first)) => configured.min(first),
        (Some(configured), None) => configured,
        (None, Some(first)) => first,
        (None, None) => return Vec::new(),
    };

    let mut end = today;
    if let Some(configured_end) = config.end_date {
        end = end.min(configured_end);
    }
    if start > end {
        return Vec::new();
    }

    let index: std::collections::BTreeMap<NaiveDate, &HabitEntry> =
        entries.iter().map(|e| (e.date, e)).collect();

    crate::dates::day_range(start, end, false)
        .into_iter()
        .filter(|date| config.is_scheduled(*date))
        .map(|date| ScheduledDay {
            date,
            ticked: index
                .get(&date)
                .map_or(false, |e| e.is_ticked(config.habit_type)),
        })
        .collect()
}
