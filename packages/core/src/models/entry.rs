//! Flattened leaf records returned by the lookup service

use super::Level;
use serde::{Deserialize, Serialize};

/// Simplified record for one motif, as produced by flattening the forest
///
/// `key` always equals `code` and `level` is always [`Level::Motif`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeafEntry {
    pub code: String,
    pub title: String,
    pub key: String,
    pub level: Level,
}

impl LeafEntry {
    /// Case-insensitive substring match on code or title
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.code.to_lowercase().contains(needle) || self.title.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_leaf_entry_serialization() {
        let entry = LeafEntry {
            code: "D1050".to_string(),
            title: "Magic clothes.".to_string(),
            key: "D1050".to_string(),
            level: Level::Motif,
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            json!({
                "code": "D1050",
                "title": "Magic clothes.",
                "key": "D1050",
                "level": 4
            })
        );
    }

    #[test]
    fn test_matches_lowercase() {
        let entry = LeafEntry {
            code: "B11".to_string(),
            title: "Dragon. *Krappe Balor 25ff.".to_string(),
            key: "B11".to_string(),
            level: Level::Motif,
        };

        assert!(entry.matches_lowercase("dragon"));
        assert!(entry.matches_lowercase("b11"));
        assert!(!entry.matches_lowercase("serpent"));
    }
}
