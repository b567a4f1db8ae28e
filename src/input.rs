/// Habit document parsing boundary
///
/// The host stores each habit as a markdown note whose YAML frontmatter
/// holds the config fields and the entry list. This module accepts that
/// on-disk shape, a bare YAML mapping, or a JSON object, and hands back
/// the raw frontmatter for `resolve` to turn into a `HabitConfig`.

use std::collections::BTreeSet;
use std::path::Path;

use chrono::NaiveDate;

use crate::domain::{DomainError, HabitEntry, HabitFrontmatter};
use crate::EngineError;

/// Parse a habit document from text
///
/// Accepts a markdown note with a `---`-fenced frontmatter block, a bare
/// YAML mapping, or a JSON object. Entries are validated here: malformed
/// values are rejected and duplicate dates are an error, since the engine
/// assumes one entry per date.
pub fn parse_document(text: &str) -> Result<HabitFrontmatter, DomainError> {
    let text = text.trim_start_matches('\u{feff}');

    let frontmatter: HabitFrontmatter = if let Some(block) = extract_frontmatter(text) {
        parse_yaml(block)?
    } else if text.trim_start().starts_with('{') {
        serde_json::from_str(text).map_err(|e| DomainError::Parse(e.to_string()))?
    } else {
        parse_yaml(text)?
    };

    validate_entries(&frontmatter.entries)?;
    Ok(frontmatter)
}

/// Read and parse a habit document from a file
pub fn load_document(path: &Path) -> Result<HabitFrontmatter, EngineError> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_document(&text)?)
}

fn parse_yaml(text: &str) -> Result<HabitFrontmatter, DomainError> {
    if text.trim().is_empty() {
        return Ok(HabitFrontmatter::default());
    }
    serde_yaml_ng::from_str(text).map_err(|e| DomainError::Parse(e.to_string()))
}

/// The YAML block between the opening and closing `---` fences, if the
/// text starts with one
fn extract_frontmatter(text: &str) -> Option<&str> {
    let after = text.strip_prefix("---")?;
    let after = after
        .strip_prefix("\r\n")
        .or_else(|| after.strip_prefix('\n'))?;
    let end = after.find("\n---")?;
    Some(&after[..end])
}

fn validate_entries(entries: &[HabitEntry]) -> Result<(), DomainError> {
    let mut seen: BTreeSet<NaiveDate> = BTreeSet::new();
    for entry in entries {
        entry.validate()?;
        if !seen.insert(entry.date) {
            return Err(DomainError::DuplicateEntry(entry.date));
        }
    }
    Ok(())
}
