//! Store Error Types
//!
//! This module defines error types for building a taxonomy store. Building is
//! the only fallible step; once a store exists every query is infallible.

use crate::models::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Taxonomy store construction errors
#[derive(Error, Debug)]
pub enum TaxonomyError {
    /// Source data violates the taxonomy's structural rules
    #[error("Taxonomy validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Source JSON could not be parsed
    #[error("Failed to parse taxonomy source: {0}")]
    Parse(#[from] serde_json::Error),

    /// Source file could not be read
    #[error("Failed to read taxonomy source at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration rejected before loading
    #[error("Invalid taxonomy configuration: {0}")]
    Config(String),
}

impl TaxonomyError {
    /// Create an I/O error for a source path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
