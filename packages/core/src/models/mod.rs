//! Data Models
//!
//! This module contains the data structures of the Motif-Index taxonomy:
//!
//! - `Level` - The four classification depths
//! - `TaxonomyNode` - Typed forest node (`Branch` for levels 1–3, `Motif` for leaves)
//! - `SourceNode` - Loosely typed mirror of the JSON source format
//! - `LeafEntry` - Flattened motif record returned by lookups

mod entry;
mod level;
mod node;
mod source;

pub use entry::LeafEntry;
pub use level::Level;
pub use node::{compose_key, path_segment, Branch, Motif, TaxonomyNode, ValidationError};
pub use source::SourceNode;
