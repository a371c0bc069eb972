//! Taxonomy Store Layer
//!
//! This module owns the immutable Motif-Index forest:
//!
//! - Loading and validating JSON sources (fail fast on malformed data)
//! - Programmatic construction through `TaxonomyBuilder`
//! - Code and key indexes built once at construction
//!
//! A store is an explicit value. Consumers receive it by reference or `Arc`;
//! there is no process-wide singleton.

mod builder;
mod error;
mod loader;
mod taxonomy_store;

pub use builder::{BranchBuilder, TaxonomyBuilder};
pub use error::TaxonomyError;
pub use taxonomy_store::{TaxonomyStats, TaxonomyStore, BUNDLED_MOTIF_INDEX};
