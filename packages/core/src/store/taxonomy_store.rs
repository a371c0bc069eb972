//! Taxonomy Store
//!
//! Owns the immutable Motif-Index forest together with the indexes built from
//! it at construction time.
//!
//! # Architecture
//!
//! - **Forest**: ordered categories, validated once by the loader
//! - **Leaf table**: every motif flattened in document order
//! - **Code index**: `code → position` in the leaf table for O(1) lookup
//! - **Branch index**: `key → (path, leaf range)`; because the leaf table is in
//!   document order, the motifs under any branch form one contiguous slice
//!
//! No method takes `&mut self`. Once built, a store can be shared freely
//! (it is `Send + Sync`), typically behind an `Arc`.

use super::loader::ForestLoader;
use super::TaxonomyError;
use crate::config::TaxonomyConfig;
use crate::models::{Branch, LeafEntry, Level, SourceNode, TaxonomyNode};
use crate::services::traversal::flatten_leaves;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::Range;
use std::path::Path;

/// Excerpt of Thompson's Motif-Index compiled into the crate
pub const BUNDLED_MOTIF_INDEX: &str = include_str!("../../data/motif_index.json");

/// Node counts per level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyStats {
    pub categories: usize,
    pub range_groups: usize,
    pub subgroups: usize,
    pub motifs: usize,
}

impl TaxonomyStats {
    fn record(&mut self, level: Level) {
        match level {
            Level::Category => self.categories += 1,
            Level::RangeGroup => self.range_groups += 1,
            Level::Subgroup => self.subgroups += 1,
            Level::Motif => self.motifs += 1,
        }
    }
}

/// Location of a branch in the forest
#[derive(Debug, Clone)]
struct BranchSlot {
    /// Child indices from the root collection down to the branch
    path: Vec<usize>,

    /// Positions of the branch's motifs in the leaf table
    leaves: Range<usize>,
}

/// Immutable, indexed Motif-Index forest
#[derive(Debug, Clone)]
pub struct TaxonomyStore {
    roots: Vec<TaxonomyNode>,
    entries: Vec<LeafEntry>,
    leaf_parents: Vec<String>,
    code_index: HashMap<String, usize>,
    branch_index: HashMap<String, BranchSlot>,
    stats: TaxonomyStats,
    general_segment: String,
}

impl TaxonomyStore {
    /// Build the store from the excerpt bundled with the crate
    pub fn bundled() -> Result<Self, TaxonomyError> {
        Self::from_json_str(BUNDLED_MOTIF_INDEX, &TaxonomyConfig::default())
    }

    /// Read a JSON source file and build the store
    pub fn from_path(
        path: impl AsRef<Path>,
        config: &TaxonomyConfig,
    ) -> Result<Self, TaxonomyError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| TaxonomyError::io(path, e))?;
        Self::from_json_str(&json, config)
    }

    /// Parse a JSON array of categories and build the store
    pub fn from_json_str(json: &str, config: &TaxonomyConfig) -> Result<Self, TaxonomyError> {
        let sources: Vec<SourceNode> = serde_json::from_str(json)?;
        Self::from_sources(sources, config)
    }

    /// Validate source nodes and build the store
    ///
    /// # Errors
    ///
    /// Returns `TaxonomyError::Config` for an invalid configuration and
    /// `TaxonomyError::Validation` for the first structural defect found in
    /// the source. No partially built store is ever returned.
    pub fn from_sources(
        sources: Vec<SourceNode>,
        config: &TaxonomyConfig,
    ) -> Result<Self, TaxonomyError> {
        config.validate().map_err(TaxonomyError::config)?;

        let roots = ForestLoader::new(config).load(sources)?;
        Ok(Self::index(roots, config.general_segment.clone()))
    }

    fn index(roots: Vec<TaxonomyNode>, general_segment: String) -> Self {
        let entries = flatten_leaves(&roots);

        let mut code_index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            code_index.entry(entry.code.clone()).or_insert(position);
        }

        let mut indexer = BranchIndexer {
            path: Vec::new(),
            cursor: 0,
            leaf_parents: Vec::with_capacity(entries.len()),
            branch_index: HashMap::new(),
            stats: TaxonomyStats::default(),
        };
        indexer.walk(&roots);
        debug_assert_eq!(indexer.leaf_parents.len(), entries.len());

        tracing::info!(
            "Taxonomy store built: {} categories, {} range groups, {} subgroups, {} motifs",
            indexer.stats.categories,
            indexer.stats.range_groups,
            indexer.stats.subgroups,
            indexer.stats.motifs
        );

        Self {
            roots,
            entries,
            leaf_parents: indexer.leaf_parents,
            code_index,
            branch_index: indexer.branch_index,
            stats: indexer.stats,
            general_segment,
        }
    }

    /// Ordered level-1 categories
    pub fn roots(&self) -> &[TaxonomyNode] {
        &self.roots
    }

    /// Every motif as a flattened record, in document order
    pub fn entries(&self) -> &[LeafEntry] {
        &self.entries
    }

    /// Indexed lookup of a motif record by exact code
    pub fn entry(&self, code: &str) -> Option<&LeafEntry> {
        self.code_index
            .get(code)
            .and_then(|&position| self.entries.get(position))
    }

    /// Key of the subgroup enclosing a motif
    pub fn leaf_parent_key(&self, code: &str) -> Option<&str> {
        self.code_index
            .get(code)
            .and_then(|&position| self.leaf_parents.get(position))
            .map(String::as_str)
    }

    /// Branch with the given key
    pub fn branch(&self, key: &str) -> Option<&Branch> {
        let slot = self.branch_index.get(key)?;
        let (first, rest) = slot.path.split_first()?;

        let mut node = self.roots.get(*first)?;
        for &index in rest {
            node = node.children().get(index)?;
        }
        node.as_branch()
    }

    /// Motifs below a branch, in document order
    pub fn leaves_under(&self, key: &str) -> Option<&[LeafEntry]> {
        let slot = self.branch_index.get(key)?;
        self.entries.get(slot.leaves.clone())
    }

    pub fn stats(&self) -> TaxonomyStats {
        self.stats
    }

    /// Segment used for branches with neither a name nor a range
    pub fn general_segment(&self) -> &str {
        &self.general_segment
    }

    /// Number of motifs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The forest in JSON source form
    pub fn export_sources(&self) -> Vec<SourceNode> {
        self.roots.iter().map(SourceNode::from).collect()
    }
}

struct BranchIndexer {
    path: Vec<usize>,
    cursor: usize,
    leaf_parents: Vec<String>,
    branch_index: HashMap<String, BranchSlot>,
    stats: TaxonomyStats,
}

impl BranchIndexer {
    fn walk(&mut self, nodes: &[TaxonomyNode]) {
        for (index, node) in nodes.iter().enumerate() {
            self.stats.record(node.level());

            match node {
                TaxonomyNode::Leaf(motif) => {
                    self.leaf_parents.push(motif.parent_key.clone());
                    self.cursor += 1;
                }
                TaxonomyNode::Branch(branch) => {
                    self.path.push(index);
                    let start = self.cursor;
                    self.walk(&branch.children);

                    self.branch_index.insert(
                        branch.key.clone(),
                        BranchSlot {
                            path: self.path.clone(),
                            leaves: start..self.cursor,
                        },
                    );
                    self.path.pop();
                }
            }
        }
    }
}
