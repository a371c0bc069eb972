//! Lookup Service
//!
//! Read-only queries over a [`TaxonomyStore`]. The service borrows the store
//! and is `Copy`, so it can be created wherever a query is needed.
//!
//! # Queries
//!
//! - `get_all_leaf_entries` - every motif in document order
//! - `find_leaf_by_code` - exact, case-sensitive code lookup
//! - `find_branch` / `leaves_under` - navigation by branch key
//! - `ancestors` - branches from category down to a motif's subgroup
//! - `breadcrumb` - display labels of those branches
//! - `search` - case-insensitive substring match on code or title
//!
//! A miss is always `None` (or an empty list), never an error.
//!
//! # Examples
//!
//! ```rust
//! use motif_index_core::{LookupService, TaxonomyStore};
//!
//! let store = TaxonomyStore::bundled().unwrap();
//! let lookup = LookupService::new(&store);
//!
//! let motif = lookup.find_leaf_by_code("D1050").unwrap();
//! assert_eq!(motif.title, "Magic clothes.");
//! assert!(lookup.find_leaf_by_code("ZZZZZZ").is_none());
//! ```

use crate::models::{Branch, LeafEntry, TaxonomyNode};
use crate::store::{TaxonomyStats, TaxonomyStore};

/// Query facade over an immutable taxonomy store
#[derive(Debug, Clone, Copy)]
pub struct LookupService<'a> {
    store: &'a TaxonomyStore,
}

impl<'a> LookupService<'a> {
    pub fn new(store: &'a TaxonomyStore) -> Self {
        Self { store }
    }

    /// Flatten the forest into its motif records
    ///
    /// Records follow document order: categories in authored order, and within
    /// each branch its children in classification order. Repeated calls return
    /// the same slice.
    pub fn get_all_leaf_entries(&self) -> &'a [LeafEntry] {
        self.store.entries()
    }

    /// Find a motif by its exact code
    ///
    /// Matches the first record a linear scan of
    /// [`get_all_leaf_entries`](Self::get_all_leaf_entries) would return,
    /// using the store's code index.
    pub fn find_leaf_by_code(&self, code: &str) -> Option<&'a LeafEntry> {
        let entry = self.store.entry(code);
        if entry.is_none() {
            tracing::trace!("Motif code not found: {}", code);
        }
        entry
    }

    /// Ordered level-1 categories
    pub fn roots(&self) -> &'a [TaxonomyNode] {
        self.store.roots()
    }

    /// Find a category, range group or subgroup by key
    pub fn find_branch(&self, key: &str) -> Option<&'a Branch> {
        self.store.branch(key)
    }

    /// Motifs below a branch, in document order
    pub fn leaves_under(&self, key: &str) -> Option<&'a [LeafEntry]> {
        self.store.leaves_under(key)
    }

    /// Branches enclosing a motif, from its category down to its subgroup
    ///
    /// Returns `None` when no motif carries `code`.
    pub fn ancestors(&self, code: &str) -> Option<Vec<&'a Branch>> {
        let mut next = Some(self.store.leaf_parent_key(code)?);
        let mut chain = Vec::new();

        while let Some(key) = next {
            let branch = self.store.branch(key)?;
            chain.push(branch);
            next = branch.parent_key.as_deref();
        }

        chain.reverse();
        Some(chain)
    }

    /// Labels of the branches enclosing a motif, category first
    ///
    /// Each label is the same segment the branch contributes to its key, so a
    /// subgroup with neither name nor range shows the configured general
    /// segment rather than an empty string.
    pub fn breadcrumb(&self, code: &str) -> Option<Vec<&'a str>> {
        let general = self.store.general_segment();
        let chain = self.ancestors(code)?;
        Some(chain.into_iter().map(|branch| branch.label(general)).collect())
    }

    /// Case-insensitive substring search over codes and titles
    ///
    /// Results keep document order and stop after `limit` matches. A blank
    /// query matches nothing.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&'a LeafEntry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.store
            .entries()
            .iter()
            .filter(|entry| entry.matches_lowercase(&needle))
            .take(limit)
            .collect()
    }

    pub fn stats(&self) -> TaxonomyStats {
        self.store.stats()
    }
}
