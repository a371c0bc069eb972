//! Taxonomy Node Structures
//!
//! This module defines the typed forest held by the taxonomy store.
//!
//! # Architecture
//!
//! - **Branch nodes** (levels 1–3) group motifs; they carry an optional name,
//!   a code range and ordered children.
//! - **Leaf nodes** (level 4) are motifs; they carry a code and a title and
//!   never have children.
//!
//! Only leaves carry a `code`, and that is enforced by the type rather than
//! by nullable fields.
//!
//! # Examples
//!
//! ```rust
//! use motif_index_core::models::{compose_key, path_segment};
//!
//! let root = compose_key(None, "Magic", "/");
//! let group = compose_key(Some(root.as_str()), path_segment(None, "D0-D99", "general"), "/");
//! assert_eq!(group, "Magic/D0-D99");
//! ```

use super::{LeafEntry, Level};
use thiserror::Error;

/// Validation errors raised while building a taxonomy forest
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid level {level} for node {}", .key.as_deref().unwrap_or("<unknown>"))]
    InvalidLevel { key: Option<String>, level: u8 },

    #[error("Node {key} has level {found}, expected {expected}")]
    LevelMismatch { key: String, expected: u8, found: u8 },

    #[error("Node {key} has parent key {found:?}, expected {expected:?}")]
    ParentKeyMismatch {
        key: String,
        expected: Option<String>,
        found: Option<String>,
    },

    #[error("Missing required field '{field}' on node {key}")]
    MissingField { key: String, field: &'static str },

    #[error("Field '{field}' is not allowed on node {key}")]
    UnexpectedField { key: String, field: &'static str },

    #[error("Motif {code} must not have children")]
    LeafWithChildren { code: String },

    #[error("Motif {code} has key {key}, expected it to equal its code")]
    LeafKeyMismatch { code: String, key: String },

    #[error("Duplicate motif code: {code}")]
    DuplicateCode { code: String },

    #[error("Duplicate branch key: {key}")]
    DuplicateKey { key: String },

    #[error("Branch key {key} does not match its path {expected}")]
    KeyPathMismatch { key: String, expected: String },
}

/// Path segment contributed by a branch to its own and its descendants' keys
///
/// Named branches use their name. Nameless ("general") subgroups fall back to
/// their range, and to `general` when the range is empty too.
pub fn path_segment<'a>(name: Option<&'a str>, range: &'a str, general: &'a str) -> &'a str {
    match name {
        Some(name) if !name.is_empty() => name,
        _ if !range.is_empty() => range,
        _ => general,
    }
}

/// Join a parent key and a path segment into a branch key
pub fn compose_key(parent_key: Option<&str>, segment: &str, separator: &str) -> String {
    match parent_key {
        Some(parent) => format!("{}{}{}", parent, separator, segment),
        None => segment.to_string(),
    }
}

/// One node of the taxonomy forest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyNode {
    Branch(Branch),
    Leaf(Motif),
}

impl TaxonomyNode {
    pub fn level(&self) -> Level {
        match self {
            TaxonomyNode::Branch(branch) => branch.level,
            TaxonomyNode::Leaf(_) => Level::Motif,
        }
    }

    /// Unique key; for leaves this is the motif code
    pub fn key(&self) -> &str {
        match self {
            TaxonomyNode::Branch(branch) => &branch.key,
            TaxonomyNode::Leaf(motif) => motif.key(),
        }
    }

    pub fn parent_key(&self) -> Option<&str> {
        match self {
            TaxonomyNode::Branch(branch) => branch.parent_key.as_deref(),
            TaxonomyNode::Leaf(motif) => Some(&motif.parent_key),
        }
    }

    /// Ordered children (always empty for leaves)
    pub fn children(&self) -> &[TaxonomyNode] {
        match self {
            TaxonomyNode::Branch(branch) => &branch.children,
            TaxonomyNode::Leaf(_) => &[],
        }
    }

    pub fn as_branch(&self) -> Option<&Branch> {
        match self {
            TaxonomyNode::Branch(branch) => Some(branch),
            TaxonomyNode::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&Motif> {
        match self {
            TaxonomyNode::Branch(_) => None,
            TaxonomyNode::Leaf(motif) => Some(motif),
        }
    }
}

/// Grouping node at levels 1–3
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub level: Level,

    /// Human-readable label; `None` for ungrouped "general" subgroups
    pub name: Option<String>,

    /// Code range covered (e.g. `A0-A99`), empty when not applicable
    pub range: String,

    /// Path key, unique among branches
    pub key: String,

    /// Key of the enclosing branch; `None` for categories
    pub parent_key: Option<String>,

    /// Children in classification order
    pub children: Vec<TaxonomyNode>,
}

impl Branch {
    /// Display label: the name, else the range, else `general`
    ///
    /// Always the same text as the branch's own key segment.
    pub fn label<'a>(&'a self, general: &'a str) -> &'a str {
        path_segment(self.name.as_deref(), &self.range, general)
    }

    pub fn is_root(&self) -> bool {
        self.parent_key.is_none()
    }
}

/// Leaf motif at level 4
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motif {
    /// Short identifier, unique across the forest (e.g. `D1050`)
    pub code: String,

    /// Descriptive text, often with a truncated bibliographic annotation
    pub title: String,

    /// Key of the enclosing subgroup
    pub parent_key: String,
}

impl Motif {
    /// Leaf keys are their codes
    pub fn key(&self) -> &str {
        &self.code
    }

    pub fn to_entry(&self) -> LeafEntry {
        LeafEntry {
            code: self.code.clone(),
            title: self.title.clone(),
            key: self.code.clone(),
            level: Level::Motif,
        }
    }
}
