//! Parser for persisted vocabulary entries.
//!
//! # Format
//! Saved lists store one string per translation pair:
//! ```text
//! Hello -> שלום
//! Good morning -> בוקר טוב
//! ```
//! The delimiter is the literal `" -> "`, split on its first occurrence.

use crate::error::ParseError;
use crate::types::VocabularyEntry;

/// Delimiter between the source and target halves of a stored entry.
pub const DELIMITER: &str = " -> ";

/// Parse a single `"<source> -> <target>"` string. Both halves are trimmed.
pub fn parse_entry(raw: &str) -> Result<VocabularyEntry, ParseError> {
    let (source, target) = raw.split_once(DELIMITER).ok_or_else(|| {
        ParseError::MissingDelimiter {
            entry: raw.to_string(),
        }
    })?;

    let source = source.trim();
    let target = target.trim();
    if source.is_empty() || target.is_empty() {
        return Err(ParseError::EmptyField {
            entry: raw.to_string(),
        });
    }

    Ok(VocabularyEntry {
        source: source.to_string(),
        target: target.to_string(),
    })
}

/// Parse a whole saved list, skipping malformed entries with a warning.
/// A single bad record must not block quiz construction.
pub fn parse_saved_list(raw: &[String]) -> Vec<VocabularyEntry> {
    raw.iter()
        .filter_map(|entry| match parse_entry(entry) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                tracing::warn!("skipping malformed saved entry: {err}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_word_entry() {
        let entry = parse_entry("Hello -> שלום").unwrap();
        assert_eq!(entry.source, "Hello");
        assert_eq!(entry.target, "שלום");
    }

    #[test]
    fn parse_sentence_entry() {
        let entry = parse_entry("Good morning -> בוקר טוב").unwrap();
        assert_eq!(entry.source, "Good morning");
        assert_eq!(entry.target, "בוקר טוב");
    }

    #[test]
    fn parse_trims_whitespace() {
        let entry = parse_entry("  Hello  ->  שלום  ").unwrap();
        assert_eq!(entry.source, "Hello");
        assert_eq!(entry.target, "שלום");
    }

    #[test]
    fn parse_splits_on_first_delimiter() {
        let entry = parse_entry("a -> b -> c").unwrap();
        assert_eq!(entry.source, "a");
        assert_eq!(entry.target, "b -> c");
    }

    #[test]
    fn reject_missing_delimiter() {
        let result = parse_entry("Hello שלום");
        assert!(matches!(result, Err(ParseError::MissingDelimiter { .. })));
    }

    #[test]
    fn reject_arrow_without_spaces() {
        let result = parse_entry("Hello->שלום");
        assert!(matches!(result, Err(ParseError::MissingDelimiter { .. })));
    }

    #[test]
    fn reject_empty_target() {
        let result = parse_entry("Hello -> ");
        assert!(matches!(result, Err(ParseError::EmptyField { .. })));
    }

    #[test]
    fn reject_empty_source() {
        let result = parse_entry(" -> שלום");
        assert!(matches!(result, Err(ParseError::EmptyField { .. })));
    }

    #[test]
    fn saved_list_skips_malformed_entries() {
        let raw = vec![
            "Hello -> שלום".to_string(),
            "no delimiter here".to_string(),
            "Cat -> חתול".to_string(),
        ];
        let entries = parse_saved_list(&raw);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].source, "Hello");
        assert_eq!(entries[1].source, "Cat");
    }

    #[test]
    fn saved_list_of_only_malformed_entries_is_empty() {
        let raw = vec!["bad".to_string(), "also bad".to_string()];
        assert!(parse_saved_list(&raw).is_empty());
    }
}
