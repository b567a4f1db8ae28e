/// Basic unit tests to verify core functionality through the public API
use habit_grid::*;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(s: &str) -> NaiveDate {
        dates::parse_day(s).unwrap()
    }

    #[test]
    fn test_frontmatter_resolution() {
        let frontmatter = parse_document(
            "type: duration\nunit: minutes\nmaxFreezeDays: 2\nentries: []\n",
        )
        .unwrap();
        let config = frontmatter.resolve(&Defaults::default()).unwrap();

        assert_eq!(config.habit_type, HabitType::Duration);
        assert_eq!(config.unit.as_deref(), Some("minutes"));
        assert_eq!(config.max_freeze_days, 2);
        assert_eq!(config.frequency, Frequency::Daily);
    }

    #[test]
    fn test_evaluate_produces_both_outputs() {
        let entries = vec![
            HabitEntry::on(day("2024-01-01")),
            HabitEntry::on(day("2024-01-02")),
        ];
        let config = HabitConfig::new(HabitType::Completion, Frequency::Daily);
        let range = DateRange::new(day("2024-01-01"), day("2024-01-03"), false);

        let result = evaluate(&entries, &config, &range, day("2024-01-03"));
        assert_eq!(result.days.len(), 3);
        assert_eq!(result.metrics.total_completions, 2);
        assert_eq!(result.metrics.current_streak, 0);
        assert_eq!(result.metrics.longest_streak, 2);
    }

    #[test]
    fn test_evaluate_is_pure() {
        let entries = vec![HabitEntry::on(day("2024-01-01"))];
        let mut config = HabitConfig::new(HabitType::Completion, Frequency::Daily);
        config.frozen_dates.insert(day("2024-01-02"));
        config.max_freeze_days = 7;
        let range = DateRange::new(day("2024-01-01"), day("2024-01-03"), true);

        let first = evaluate(&entries, &config, &range, day("2024-01-03"));
        let second = evaluate(&entries, &config, &range, day("2024-01-03"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_display_entries_serialize() {
        let entries = vec![HabitEntry::on(day("2024-01-01"))];
        let config = HabitConfig::new(HabitType::Completion, Frequency::Daily);
        let range = DateRange::new(day("2024-01-01"), day("2024-01-01"), false);

        let result = evaluate(&entries, &config, &range, day("2024-01-01"));
        let json = serde_json::to_string(&result.days).unwrap();
        assert!(json.contains("\"2024-01-01\""));
        assert!(json.contains("\"ticked\":true"));

        let metrics_json = serde_json::to_string(&result.metrics).unwrap();
        assert!(metrics_json.contains("\"current_streak\":1"));
    }

    #[test]
    fn test_invalid_frequency_fails_fast() {
        let frontmatter = parse_document(
            "frequency:\n  type: custom\n  weekdays: []\nentries: []\n",
        )
        .unwrap();
        let result = frontmatter.resolve(&Defaults::default());
        assert!(matches!(result, Err(DomainError::InvalidFrequency(_))));
    }
}
