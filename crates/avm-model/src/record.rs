use serde::{Deserialize, Serialize};

use crate::distance::Letter;
use crate::taxonomy::ENTRY_SEPARATOR;

/// One row of the input batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    /// Press release identifier (`2013-05-a`).
    pub release_id: String,
    /// Informal category field exactly as supplied.
    pub category_text: String,
    pub object_name: String,
    /// Raw distance token.
    pub distance: String,
}

/// The resolved taxonomy codes for one input record.
///
/// `number` and `word` are `"; "`-joined, one entry per resolved label, and
/// both are empty when the record carried a sentinel label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRecord {
    pub release_id: String,
    pub object_name: String,
    pub distance: String,
    /// Letter derived from the distance alone.
    pub letter: Letter,
    pub number: String,
    pub word: String,
    pub category_text: String,
}

impl ResolvedRecord {
    /// True when no taxonomy code was produced.
    pub fn is_blank(&self) -> bool {
        self.number.is_empty() && self.word.is_empty()
    }

    pub fn number_entries(&self) -> Vec<&str> {
        split_entries(&self.number)
    }

    pub fn word_entries(&self) -> Vec<&str> {
        split_entries(&self.word)
    }
}

/// Payload persisted in the object registry for a release identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub release_id: String,
    pub object_name: String,
    pub distance: String,
    pub number: String,
    pub word: String,
    pub category: String,
}

impl RegistryEntry {
    /// Build the registry payload for a resolved record.
    ///
    /// Empty and `D` distances are written as `-`, as is every other `D`
    /// character. Repeated number and word entries are collapsed, keeping
    /// the first occurrence, and re-joined with `", "`.
    pub fn from_resolved(record: &ResolvedRecord) -> Self {
        Self {
            release_id: record.release_id.clone(),
            object_name: record.object_name.clone(),
            distance: registry_distance(&record.distance),
            number: collapse_entries(&record.number),
            word: collapse_entries(&record.word),
            category: record.category_text.clone(),
        }
    }
}

fn registry_distance(distance: &str) -> String {
    if distance.is_empty() || distance == "D" {
        return "-".to_string();
    }
    distance.replace('D', "-")
}

fn split_entries(joined: &str) -> Vec<&str> {
    if joined.is_empty() {
        Vec::new()
    } else {
        joined.split(ENTRY_SEPARATOR).collect()
    }
}

fn collapse_entries(joined: &str) -> String {
    let mut unique: Vec<&str> = Vec::new();
    for entry in split_entries(joined) {
        if !unique.contains(&entry) {
            unique.push(entry);
        }
    }
    unique.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(distance: &str, number: &str, word: &str) -> ResolvedRecord {
        ResolvedRecord {
            release_id: "2013-05-a".to_string(),
            object_name: "M51".to_string(),
            distance: distance.to_string(),
            letter: Letter::None,
            number: number.to_string(),
            word: word.to_string(),
            category_text: "Galaxy > Spiral".to_string(),
        }
    }

    #[test]
    fn registry_distance_uses_dash_placeholder() {
        assert_eq!(registry_distance(""), "-");
        assert_eq!(registry_distance("D"), "-");
        assert_eq!(registry_distance("-;D"), "-;-");
        assert_eq!(registry_distance("23000"), "23000");
    }

    #[test]
    fn registry_entry_collapses_repeated_codes() {
        let record = resolved(
            "50000",
            "C.5.1.1; C.5.1.1; C.3.1.8",
            "Galaxy.Spiral; Galaxy.Spiral; Star.Blue Supergiant",
        );
        let entry = RegistryEntry::from_resolved(&record);
        assert_eq!(entry.number, "C.5.1.1, C.3.1.8");
        assert_eq!(entry.word, "Galaxy.Spiral, Star.Blue Supergiant");
        assert_eq!(entry.distance, "50000");
    }

    #[test]
    fn blank_record_has_no_entries() {
        let record = resolved("", "", "");
        assert!(record.is_blank());
        assert!(record.number_entries().is_empty());
        assert_eq!(RegistryEntry::from_resolved(&record).number, "");
    }
}
