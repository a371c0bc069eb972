//! Source Format
//!
//! `SourceNode` mirrors the nested JSON the taxonomy is authored in. Every
//! field is loosely typed here; the store's loader turns a `Vec<SourceNode>`
//! into the typed [`TaxonomyNode`] forest and rejects malformed data.
//!
//! ```json
//! {
//!   "level": 3,
//!   "name": null,
//!   "range": "A0-A99",
//!   "key": "Mythological Motifs/Creator/A0-A99",
//!   "parentKey": "Mythological Motifs/Creator",
//!   "children": [
//!     { "level": 4, "code": "A0", "title": "Creator.", "key": "A0",
//!       "parentKey": "Mythological Motifs/Creator/A0-A99" }
//!   ]
//! }
//! ```

use super::{Level, TaxonomyNode};
use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` the same as a missing field
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One node as it appears in the JSON source
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceNode {
    /// Raw level; validated against the node's depth when loading
    pub level: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub range: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_key: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<SourceNode>,
}

impl SourceNode {
    /// Source form of a branch node
    pub fn branch(
        level: Level,
        name: Option<&str>,
        range: &str,
        key: &str,
        parent_key: Option<&str>,
        children: Vec<SourceNode>,
    ) -> Self {
        Self {
            level: level.as_u8(),
            name: name.map(str::to_string),
            range: range.to_string(),
            key: Some(key.to_string()),
            parent_key: parent_key.map(str::to_string),
            children,
            ..Default::default()
        }
    }

    /// Source form of a leaf motif
    pub fn leaf(code: &str, title: &str, parent_key: &str) -> Self {
        Self {
            level: Level::Motif.as_u8(),
            code: Some(code.to_string()),
            title: Some(title.to_string()),
            key: Some(code.to_string()),
            parent_key: Some(parent_key.to_string()),
            ..Default::default()
        }
    }

    /// Best available identifier for error messages
    pub(crate) fn display_key(&self) -> String {
        self.key
            .clone()
            .or_else(|| self.code.clone())
            .or_else(|| self.name.clone())
            .unwrap_or_else(|| format!("<level {} node>", self.level))
    }
}

impl From<&TaxonomyNode> for SourceNode {
    fn from(node: &TaxonomyNode) -> Self {
        match node {
            TaxonomyNode::Branch(branch) => SourceNode::branch(
                branch.level,
                branch.name.as_deref(),
                &branch.range,
                &branch.key,
                branch.parent_key.as_deref(),
                branch.children.iter().map(SourceNode::from).collect(),
            ),
            TaxonomyNode::Leaf(motif) => {
                SourceNode::leaf(&motif.code, &motif.title, &motif.parent_key)
            }
        }
    }
}
