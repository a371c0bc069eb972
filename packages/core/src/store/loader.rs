//! Forest Loader
//!
//! Converts the loosely typed [`SourceNode`] tree into the typed
//! [`TaxonomyNode`] forest, enforcing the structural rules of the taxonomy:
//!
//! 1. Levels run 1 → 4 with each child exactly one level below its parent
//! 2. `parentKey` is absent on categories and equals the parent's key elsewhere
//! 3. Branches carry no `code`/`title` and have unique, non-empty keys
//! 4. Motifs carry a non-empty `code` and a `title`, have no children, and
//!    their key (when given) equals their code; codes are unique
//! 5. Optionally, branch keys equal their composed path
//!
//! Loading stops at the first defect.

use crate::config::TaxonomyConfig;
use crate::models::{
    compose_key, path_segment, Branch, Level, Motif, SourceNode, TaxonomyNode, ValidationError,
};
use std::collections::HashSet;

pub(crate) struct ForestLoader<'c> {
    config: &'c TaxonomyConfig,
    codes: HashSet<String>,
    keys: HashSet<String>,
}

impl<'c> ForestLoader<'c> {
    pub(crate) fn new(config: &'c TaxonomyConfig) -> Self {
        Self {
            config,
            codes: HashSet::new(),
            keys: HashSet::new(),
        }
    }

    /// Validate and convert a list of categories
    pub(crate) fn load(
        mut self,
        sources: Vec<SourceNode>,
    ) -> Result<Vec<TaxonomyNode>, ValidationError> {
        let mut roots = Vec::with_capacity(sources.len());

        for source in sources {
            let root = self.load_node(source, Level::Category, None)?;
            tracing::debug!(
                "Loaded category '{}' ({} children)",
                root.key(),
                root.children().len()
            );
            roots.push(root);
        }

        warn_duplicate_ranges(None, &roots);
        Ok(roots)
    }

    fn load_node(
        &mut self,
        source: SourceNode,
        expected: Level,
        parent_key: Option<&str>,
    ) -> Result<TaxonomyNode, ValidationError> {
        let level = Level::try_from(source.level).map_err(|_| ValidationError::InvalidLevel {
            key: Some(source.display_key()),
            level: source.level,
        })?;

        if level != expected {
            return Err(ValidationError::LevelMismatch {
                key: source.display_key(),
                expected: expected.as_u8(),
                found: level.as_u8(),
            });
        }

        if source.parent_key.as_deref() != parent_key {
            return Err(ValidationError::ParentKeyMismatch {
                key: source.display_key(),
                expected: parent_key.map(str::to_string),
                found: source.parent_key,
            });
        }

        match level.child() {
            Some(child_level) => self.load_branch(source, level, child_level, parent_key),
            None => self.load_leaf(source, parent_key.unwrap_or_default()),
        }
    }

    fn load_branch(
        &mut self,
        source: SourceNode,
        level: Level,
        child_level: Level,
        parent_key: Option<&str>,
    ) -> Result<TaxonomyNode, ValidationError> {
        if source.code.is_some() {
            return Err(ValidationError::UnexpectedField {
                key: source.display_key(),
                field: "code",
            });
        }
        if source.title.is_some() {
            return Err(ValidationError::UnexpectedField {
                key: source.display_key(),
                field: "title",
            });
        }
        if source.key.as_deref().map_or(true, str::is_empty) {
            return Err(ValidationError::MissingField {
                key: source.display_key(),
                field: "key",
            });
        }
        let key = source.key.unwrap_or_default();

        if self.config.verify_key_paths {
            let segment = path_segment(
                source.name.as_deref(),
                &source.range,
                &self.config.general_segment,
            );
            let expected = compose_key(parent_key, segment, &self.config.key_separator);
            if key != expected {
                return Err(ValidationError::KeyPathMismatch { key, expected });
            }
        }

        if !self.keys.insert(key.clone()) {
            return Err(ValidationError::DuplicateKey { key });
        }

        let mut children = Vec::with_capacity(source.children.len());
        for child in source.children {
            children.push(self.load_node(child, child_level, Some(key.as_str()))?);
        }
        warn_duplicate_ranges(Some(key.as_str()), &children);

        Ok(TaxonomyNode::Branch(Branch {
            level,
            name: source.name,
            range: source.range,
            key,
            parent_key: parent_key.map(str::to_string),
            children,
        }))
    }

    fn load_leaf(
        &mut self,
        source: SourceNode,
        parent_key: &str,
    ) -> Result<TaxonomyNode, ValidationError> {
        if source.code.as_deref().map_or(true, str::is_empty) {
            return Err(ValidationError::MissingField {
                key: source.display_key(),
                field: "code",
            });
        }
        let code = source.code.unwrap_or_default();

        let title = source.title.ok_or_else(|| ValidationError::MissingField {
            key: code.clone(),
            field: "title",
        })?;

        if !source.children.is_empty() {
            return Err(ValidationError::LeafWithChildren { code });
        }

        if let Some(key) = source.key {
            if key != code {
                return Err(ValidationError::LeafKeyMismatch { code, key });
            }
        }

        if !self.codes.insert(code.clone()) {
            return Err(ValidationError::DuplicateCode { code });
        }

        Ok(TaxonomyNode::Leaf(Motif {
            code,
            title,
            parent_key: parent_key.to_string(),
        }))
    }
}

/// Sibling branches sharing a range annotation are kept as authored
fn warn_duplicate_ranges(parent_key: Option<&str>, siblings: &[TaxonomyNode]) {
    let mut seen = HashSet::new();

    for branch in siblings.iter().filter_map(TaxonomyNode::as_branch) {
        if branch.range.is_empty() {
            continue;
        }
        if !seen.insert(branch.range.as_str()) {
            tracing::warn!(
                "Duplicate range '{}' under '{}' (branch '{}')",
                branch.range,
                parent_key.unwrap_or("<root>"),
                branch.key
            );
        }
    }
}
