//! Query Services
//!
//! This module contains the read-only query logic over the taxonomy store:
//!
//! - `LookupService` - Flatten, find-by-code and navigation queries
//! - `traversal` - Depth-first walks used to flatten the forest
//!
//! Services never mutate the store; they only borrow it.

pub mod lookup_service;
pub mod traversal;

pub use lookup_service::LookupService;
pub use traversal::{count_leaves, flatten_leaves};
