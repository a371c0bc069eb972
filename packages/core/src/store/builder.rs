//! Programmatic Taxonomy Construction
//!
//! `TaxonomyBuilder` assembles a forest from names, ranges, codes and titles.
//! Levels, keys and parent keys are derived from nesting, then the result goes
//! through the same validation as JSON sources.
//!
//! # Examples
//!
//! ```rust
//! use motif_index_core::store::TaxonomyBuilder;
//!
//! let store = TaxonomyBuilder::new()
//!     .category("Magic", "D0-D2199", |c| {
//!         c.group(Some("Transformation"), "D0-D699", |g| {
//!             g.group(None, "D0-D99", |s| {
//!                 s.motif("D0", "Transformation (general).");
//!             });
//!         });
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(store.entries()[0].code, "D0");
//! assert!(store.branch("Magic/Transformation/D0-D99").is_some());
//! ```

use super::{TaxonomyError, TaxonomyStore};
use crate::config::TaxonomyConfig;
use crate::models::{compose_key, path_segment, SourceNode};

#[derive(Debug, Clone)]
enum DraftNode {
    Branch {
        name: Option<String>,
        range: String,
        children: Vec<DraftNode>,
    },
    Leaf {
        code: String,
        title: String,
    },
}

/// Collects the children of one branch
#[derive(Debug, Default)]
pub struct BranchBuilder {
    children: Vec<DraftNode>,
}

impl BranchBuilder {
    /// Add a nested branch; `name` is `None` for ungrouped "general" subgroups
    pub fn group(
        &mut self,
        name: Option<&str>,
        range: &str,
        build: impl FnOnce(&mut BranchBuilder),
    ) -> &mut Self {
        let mut nested = BranchBuilder::default();
        build(&mut nested);

        self.children.push(DraftNode::Branch {
            name: name.map(str::to_string),
            range: range.to_string(),
            children: nested.children,
        });
        self
    }

    /// Add a motif
    pub fn motif(&mut self, code: &str, title: &str) -> &mut Self {
        self.children.push(DraftNode::Leaf {
            code: code.to_string(),
            title: title.to_string(),
        });
        self
    }
}

/// Builder for a [`TaxonomyStore`]
#[derive(Debug, Default)]
pub struct TaxonomyBuilder {
    config: TaxonomyConfig,
    roots: Vec<DraftNode>,
}

impl TaxonomyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom key separator or general segment
    pub fn with_config(config: TaxonomyConfig) -> Self {
        Self {
            config,
            roots: Vec::new(),
        }
    }

    /// Add a level-1 category
    pub fn category(
        mut self,
        name: &str,
        range: &str,
        build: impl FnOnce(&mut BranchBuilder),
    ) -> Self {
        let mut nested = BranchBuilder::default();
        build(&mut nested);

        self.roots.push(DraftNode::Branch {
            name: Some(name.to_string()),
            range: range.to_string(),
            children: nested.children,
        });
        self
    }

    /// The assembled forest in JSON source form
    pub fn to_sources(&self) -> Vec<SourceNode> {
        self.roots
            .iter()
            .map(|draft| self.to_source(draft, 1, None))
            .collect()
    }

    /// Validate and build the store
    pub fn build(self) -> Result<TaxonomyStore, TaxonomyError> {
        let sources = self.to_sources();
        TaxonomyStore::from_sources(sources, &self.config)
    }

    fn to_source(&self, draft: &DraftNode, depth: u8, parent_key: Option<&str>) -> SourceNode {
        match draft {
            DraftNode::Branch {
                name,
                range,
                children,
            } => {
                let segment = path_segment(name.as_deref(), range, &self.config.general_segment);
                let key = compose_key(parent_key, segment, &self.config.key_separator);
                let children = children
                    .iter()
                    .map(|child| {
                        self.to_source(child, depth.saturating_add(1), Some(key.as_str()))
                    })
                    .collect();

                SourceNode {
                    level: depth,
                    name: name.clone(),
                    range: range.clone(),
                    key: Some(key),
                    parent_key: parent_key.map(str::to_string),
                    children,
                    ..Default::default()
                }
            }
            // Leaves always claim level 4; misplaced motifs surface as level mismatches
            DraftNode::Leaf { code, title } => {
                SourceNode::leaf(code, title, parent_key.unwrap_or_default())
            }
        }
    }
}
