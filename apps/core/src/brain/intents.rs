//! Pattern-table intents.
//!
//! A flat table of (patterns, responses) records loaded once at startup from
//! JSON and immutable afterwards. Matching is plain substring containment in
//! table order, first match wins; there is no scoring and no longest-match
//! preference.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::AppError;

/// One trigger group: any pattern hit selects this record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentRecord {
    /// Lower-cased before matching; checked in stored order.
    pub patterns: Vec<String>,
    /// Candidate responses; only the first is ever served.
    pub responses: Vec<String>,
}

/// The full intent table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentTable {
    pub intents: Vec<IntentRecord>,
}

impl IntentTable {
    /// Load the table from a JSON file.
    ///
    /// A missing file or malformed structure is a startup failure; it never
    /// surfaces during classification.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let table = Self::from_json(&raw)?;
        info!(
            "Loaded {} intent records from {}",
            table.intents.len(),
            path.display()
        );
        Ok(table)
    }

    /// Parse the table from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Find the first record with any pattern contained in the message.
    ///
    /// The message is lower-cased and trimmed once; patterns are lower-cased
    /// at the comparison site. Returns `None` when nothing matches, which is
    /// distinct from a matched record whose response list is empty.
    pub fn match_message(&self, message: &str) -> Option<&IntentRecord> {
        let message = message.to_lowercase();
        let message = message.trim();
        self.intents.iter().find(|record| {
            record
                .patterns
                .iter()
                .any(|pattern| message.contains(&pattern.to_lowercase()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn table() -> IntentTable {
        IntentTable {
            intents: vec![
                IntentRecord {
                    patterns: vec!["gate".into()],
                    responses: vec!["gates".into(), "never served".into()],
                },
                IntentRecord {
                    patterns: vec!["and gate".into()],
                    responses: vec!["and".into()],
                },
            ],
        }
    }

    #[test]
    fn test_substring_containment() {
        let table = table();
        let record = table.match_message("tell me about logic gates").unwrap();
        assert_eq!(record.responses[0], "gates");
    }

    #[test]
    fn test_first_match_wins_over_longer_pattern() {
        let table = table();
        // "and gate" also matches the second record, but the first record's
        // "gate" pattern is checked first.
        let record = table.match_message("what is an and gate").unwrap();
        assert_eq!(record.responses[0], "gates");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let table = table();
        assert!(table.match_message("AND GATE?").is_some());
    }

    #[test]
    fn test_no_match() {
        let table = table();
        assert!(table.match_message("completely unrelated").is_none());
    }

    #[test]
    fn test_from_json_rejects_malformed_structure() {
        assert!(IntentTable::from_json("{\"intents\": [{}]}").is_err());
        assert!(IntentTable::from_json("not json").is_err());
    }

    #[test]
    fn test_from_path_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{{\"intents\": [{{\"patterns\": [\"hello\"], \"responses\": [\"hi\"]}}]}}"
        )
        .unwrap();

        let table = IntentTable::from_path(file.path()).unwrap();
        assert_eq!(table.intents.len(), 1);
        assert_eq!(table.match_message("hello there").unwrap().responses[0], "hi");
    }

    #[test]
    fn test_from_path_missing_file() {
        assert!(IntentTable::from_path("/nonexistent/intents.json").is_err());
    }
}
