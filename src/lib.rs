/// Public library interface for the habit grid engine
///
/// This crate is the pure computation core of a habit-tracking grid:
/// given a habit's entries, its resolved configuration, a display range,
/// and an injected "today", it produces the annotated per-day sequence a
/// renderer draws plus the habit's metrics summary. Every operation is a
/// deterministic function of its inputs with no I/O and no shared state.

use chrono::NaiveDate;
use thiserror::Error;

// Internal modules
pub mod dates;
pub mod display;
pub mod domain;
pub mod input;
pub mod metrics;

// Re-export public modules and types
pub use display::{build_display, DateRange, DisplayEntry};
pub use domain::*;
pub use input::{load_document, parse_document};
pub use metrics::{aggregate, HabitMetrics};

/// Errors that can occur outside the pure computation core
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Both computed outputs for one habit over one display range
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub days: Vec<DisplayEntry>,
    pub metrics: HabitMetrics,
}

/// Evaluate a habit: display entries plus metrics in one call
///
/// `today` is injected rather than read from a clock so results are
/// deterministic and testable. Calling twice with identical inputs
/// yields identical output.
pub fn evaluate(
    entries: &[HabitEntry],
    config: &HabitConfig,
    range: &DateRange,
    today: NaiveDate,
) -> Evaluation {
    Evaluation {
        days: build_display(entries, config, range, today),
        metrics: aggregate(entries, config, range, today),
    }
}
