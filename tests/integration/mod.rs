/// End-to-end tests: habit documents on disk through to computed output
use habit_grid::*;

#[cfg(test)]
mod basic_integration_tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn day(s: &str) -> NaiveDate {
        dates::parse_day(s).unwrap()
    }

    fn write_note(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write note");
        file
    }

    #[test]
    fn test_markdown_note_to_metrics() {
        let note = "---\n\
            title: Reading\n\
            type: quantity\n\
            unit: pages\n\
            entries:\n\
            \x20 - date: 2024-01-01\n\
            \x20   value: 10\n\
            \x20 - date: 2024-01-02\n\
            \x20   value: 14\n\
            \x20 - date: 2024-01-03\n\
            \x20   value: 6\n\
            ---\n\
            Notes about the habit go here.\n";
        let file = write_note(note);

        let frontmatter = load_document(file.path()).expect("load");
        let config = frontmatter.resolve(&Defaults::default()).expect("resolve");
        let range = DateRange::new(day("2024-01-01"), day("2024-01-03"), false);

        let result = evaluate(&frontmatter.entries, &config, &range, day("2024-01-03"));

        assert_eq!(result.metrics.current_streak, 3);
        assert_eq!(result.metrics.total_completions, 3);
        assert_eq!(result.metrics.success_rate, 100.0);
        assert_eq!(result.metrics.total_value, Some(30.0));
        assert_eq!(result.metrics.average_value, Some(10.0));
        assert_eq!(result.days.len(), 3);
        assert!(result.days.iter().all(|d| d.ticked));
    }

    #[test]
    fn test_frozen_vacation_preserves_streak() {
        let note = "---\n\
            title: Meditation\n\
            frozenDates:\n\
            \x20 - 2024-01-04\n\
            \x20 - 2024-01-05\n\
            maxFreezeDays: 3\n\
            entries:\n\
            \x20 - date: 2024-01-01\n\
            \x20 - date: 2024-01-02\n\
            \x20 - date: 2024-01-03\n\
            \x20 - date: 2024-01-06\n\
            ---\n";
        let file = write_note(note);

        let frontmatter = load_document(file.path()).expect("load");
        let config = frontmatter.resolve(&Defaults::default()).expect("resolve");
        let range = DateRange::new(day("2024-01-01"), day("2024-01-06"), false);

        let result = evaluate(&frontmatter.entries, &config, &range, day("2024-01-06"));

        // The two frozen days sit inside the freeze budget, so the run
        // survives the gap and the trailing tick extends it.
        assert_eq!(result.metrics.current_streak, 4);
        assert_eq!(result.metrics.longest_streak, 4);

        let frozen_cells: Vec<&DisplayEntry> =
            result.days.iter().filter(|d| d.frozen).collect();
        assert_eq!(frozen_cells.len(), 2);
        assert!(frozen_cells.iter().all(|d| !d.ticked));
        assert_eq!(result.days[3].streak, 3);
        assert_eq!(result.days[5].streak, 4);
    }

    #[test]
    fn test_custom_frequency_note_scores_scheduled_days() {
        // Mon/Wed/Fri via weekday numbers (0 = Sunday)
        let note = "---\n\
            frequency:\n\
            \x20 type: custom\n\
            \x20 weekdays: [1, 3, 5]\n\
            startDate: 2024-01-01\n\
            entries:\n\
            \x20 - date: 2024-01-01\n\
            \x20 - date: 2024-01-03\n\
            \x20 - date: 2024-01-05\n\
            \x20 - date: 2024-01-08\n\
            \x20 - date: 2024-01-10\n\
            \x20 - date: 2024-01-12\n\
            ---\n";
        let file = write_note(note);

        let frontmatter = load_document(file.path()).expect("load");
        let config = frontmatter.resolve(&Defaults::default()).expect("resolve");
        let range = DateRange::new(day("2024-01-01"), day("2024-01-14"), false);

        let result = evaluate(&frontmatter.entries, &config, &range, day("2024-01-14"));

        assert_eq!(result.metrics.total_completions, 6);
        assert_eq!(result.metrics.success_rate, 100.0);

        let scheduled: Vec<&DisplayEntry> = result
            .days
            .iter()
            .filter(|d| d.matches_frequency)
            .collect();
        assert_eq!(scheduled.len(), 6);
        assert!(scheduled.iter().all(|d| d.ticked));
        // Off-pattern days are shown but unscheduled and unticked
        assert!(result
            .days
            .iter()
            .filter(|d| !d.matches_frequency)
            .all(|d| !d.ticked));
    }

    #[test]
    fn test_reverse_order_round_trip() {
        let note = "---\nentries:\n  - date: 2024-01-02\n---\n";
        let file = write_note(note);

        let frontmatter = load_document(file.path()).expect("load");
        let config = frontmatter.resolve(&Defaults::default()).expect("resolve");

        let forward = DateRange::new(day("2024-01-01"), day("2024-01-03"), false);
        let backward = DateRange::new(day("2024-01-01"), day("2024-01-03"), true);

        let mut fwd = evaluate(&frontmatter.entries, &config, &forward, day("2024-01-03"));
        let bwd = evaluate(&frontmatter.entries, &config, &backward, day("2024-01-03"));

        fwd.days.reverse();
        assert_eq!(fwd.days, bwd.days);
        assert_eq!(fwd.metrics, bwd.metrics);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = load_document(std::path::Path::new("/nonexistent/habit.md"));
        assert!(matches!(result, Err(EngineError::Io(_))));
    }
}
