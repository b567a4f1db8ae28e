/// Metrics aggregator
///
/// Consumes the raw entry set and the streak calculator's output to
/// produce the habit's metrics summary: streaks, completion counts,
/// success rate, and per-week/month averages.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::display::DateRange;
use crate::domain::{compute_streaks, scheduled_history, Frequency, HabitConfig, HabitEntry};

/// Week length used by the per-week average
pub const DAYS_PER_WEEK: f64 = 7.0;
/// Month length convention: mean Gregorian month of 30.44 days
pub const DAYS_PER_MONTH: f64 = 30.44;

/// Computed metrics for a habit
///
/// `total_value` and `average_value` are populated only for duration and
/// quantity habits. `success_rate` is a percentage in [0, 100], scored
/// over scheduled in-range days only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitMetrics {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_completions: u32,
    pub success_rate: f64,
    pub average_per_week: f64,
    pub average_per_month: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_value: Option<f64>,
}

/// Aggregate the metrics summary for a habit over a display range
///
/// Completion counts and rates are scoped to the display range; the
/// streak numbers come from the full habit history, which may be far
/// longer than the displayed span. All divisions report 0 on an empty
/// denominator, never an error or NaN.
pub fn aggregate(
    entries: &[HabitEntry],
    config: &HabitConfig,
    range: &DateRange,
    today: NaiveDate,
) -> HabitMetrics {
    let history = scheduled_history(entries, config, today);
    let streaks = compute_streaks(&history, &config.frozen_dates, config.max_freeze_days);

    let index: BTreeMap<NaiveDate, &HabitEntry> = entries.iter().map(|e| (e.date, e)).collect();

    let mut active_days = 0u32;
    let mut scheduled_days = 0u32;
    let mut completions = 0u32;
    let mut value_sum = 0.0f64;

    for date in crate::dates::day_range(range.start, range.end, false) {
        if !config.in_configured_range(date) {
            continue;
        }
        active_days += 1;

        if !config.frequency.matches(date, config.start_date) {
            continue;
        }
        scheduled_days += 1;

        if let Some(entry) = index.get(&date) {
            if entry.is_ticked(config.habit_type) {
                completions += 1;
                value_sum += entry.value.unwrap_or(0.0);
            }
        }
    }

    let success_rate = match config.frequency {
        // Weekly habits score the target per 7-day window, not per day
        Frequency::Weekly(target) => {
            let expected = f64::from(target) * f64::from(active_days) / DAYS_PER_WEEK;
            percentage(f64::from(completions), expected)
        }
        _ => percentage(f64::from(completions), f64::from(scheduled_days)),
    };

    let days_in_range = f64::from(range.num_days());
    let (average_per_week, average_per_month) = if days_in_range > 0.0 {
        (
            f64::from(completions) / (days_in_range / DAYS_PER_WEEK),
            f64::from(completions) / (days_in_range / DAYS_PER_MONTH),
        )
    } else {
        (0.0, 0.0)
    };

    let (total_value, average_value) = if config.habit_type.tracks_value() {
        let average = if completions > 0 {
            value_sum / f64::from(completions)
        } else {
            0.0
        };
        (Some(value_sum), Some(average))
    } else {
        (None, None)
    };

    debug!(
        completions,
        scheduled_days,
        success_rate,
        current = streaks.current,
        "aggregated habit metrics"
    );

    HabitMetrics {
        current_streak: streaks.current,
        longest_streak: streaks.longest,
        total_completions: completions,
        success_rate,
        average_per_week,
        average_per_month,
        total_value,
        average_value,
    }
}

/// `actual / expected` as a percentage capped at 100, 0 on an empty
/// denominator
fn percentage(actual: f64, expected: f64) -> f64 {
    if expected <= 0.0 {
        0.0
    } else {
        ((actual / expected) * 100.0).min(100.0)
    }
}
