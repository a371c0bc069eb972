//! Motif Index Core
//!
//! This crate provides an immutable, in-memory store for Thompson's
//! Motif-Index and the lookup service that queries it.
//!
//! # Architecture
//!
//! - **Typed forest**: four levels (category → range group → subgroup →
//!   motif) with branches and leaves as distinct variants
//! - **Build once**: the store is validated and indexed at construction and
//!   never mutated afterwards
//! - **Borrowing queries**: `LookupService` hands out references into the store
//!
//! # Modules
//!
//! - [`models`] - Data structures (TaxonomyNode, LeafEntry, SourceNode, etc.)
//! - [`store`] - TaxonomyStore, loader and builder
//! - [`services`] - LookupService and forest traversal
//! - [`config`] - TaxonomyConfig
//!
//! # Examples
//!
//! ```rust
//! use motif_index_core::{LookupService, TaxonomyStore};
//!
//! let store = TaxonomyStore::bundled().unwrap();
//! let lookup = LookupService::new(&store);
//!
//! let entries = lookup.get_all_leaf_entries();
//! assert!(entries.iter().all(|entry| entry.key == entry.code));
//! ```

pub mod config;
pub mod models;
pub mod services;
pub mod store;

// Re-export commonly used types
pub use config::TaxonomyConfig;
pub use models::*;
pub use services::*;
pub use store::*;
