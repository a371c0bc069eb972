//! Taxonomy Levels
//!
//! The Motif-Index is exactly four levels deep. Levels serialize as their
//! plain integer value (`1`..=`4`) so records stay compatible with the JSON
//! source format.

use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Depth of a node in the classification hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Level {
    /// Top-level category (e.g. "Mythological Motifs")
    Category = 1,
    /// Range group within a category (e.g. "Creator", `A0-A99`)
    RangeGroup = 2,
    /// Subgroup within a range group; may be nameless ("general")
    Subgroup = 3,
    /// Leaf motif carrying a code and title
    Motif = 4,
}

impl Level {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Level of this node's children, or `None` for leaves
    pub fn child(self) -> Option<Level> {
        match self {
            Level::Category => Some(Level::RangeGroup),
            Level::RangeGroup => Some(Level::Subgroup),
            Level::Subgroup => Some(Level::Motif),
            Level::Motif => None,
        }
    }

    pub fn is_leaf(self) -> bool {
        self == Level::Motif
    }
}

impl TryFrom<u8> for Level {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Level::Category),
            2 => Ok(Level::RangeGroup),
            3 => Ok(Level::Subgroup),
            4 => Ok(Level::Motif),
            other => Err(ValidationError::InvalidLevel {
                key: None,
                level: other,
            }),
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.as_u8()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_levels() {
        assert_eq!(Level::Category.child(), Some(Level::RangeGroup));
        assert_eq!(Level::RangeGroup.child(), Some(Level::Subgroup));
        assert_eq!(Level::Subgroup.child(), Some(Level::Motif));
        assert_eq!(Level::Motif.child(), None);
        assert!(Level::Motif.is_leaf());
        assert!(!Level::Subgroup.is_leaf());
    }

    #[test]
    fn test_level_try_from() {
        assert_eq!(Level::try_from(1).unwrap(), Level::Category);
        assert_eq!(Level::try_from(4).unwrap(), Level::Motif);
        assert!(Level::try_from(0).is_err());
        assert!(Level::try_from(5).is_err());
    }

    #[test]
    fn test_level_serializes_as_integer() {
        assert_eq!(serde_json::to_value(Level::Motif).unwrap(), 4);
        let level: Level = serde_json::from_str("2").unwrap();
        assert_eq!(level, Level::RangeGroup);
        assert!(serde_json::from_str::<Level>("7").is_err());
    }
}
