//! Forest Traversal
//!
//! Depth-first, pre-order walks over the taxonomy forest. Output always
//! follows document order: siblings in the order they were authored, and a
//! branch's descendants before its next sibling.

use crate::models::{LeafEntry, TaxonomyNode};

/// Collect every motif in the forest as a flat, ordered list of records
pub fn flatten_leaves(roots: &[TaxonomyNode]) -> Vec<LeafEntry> {
    let mut entries = Vec::with_capacity(count_leaves(roots));
    collect_leaves(roots, &mut entries);
    entries
}

/// Number of motifs below (and including) the given nodes
pub fn count_leaves(nodes: &[TaxonomyNode]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            TaxonomyNode::Branch(branch) => count_leaves(&branch.children),
            TaxonomyNode::Leaf(_) => 1,
        })
        .sum()
}

fn collect_leaves(nodes: &[TaxonomyNode], entries: &mut Vec<LeafEntry>) {
    for node in nodes {
        match node {
            TaxonomyNode::Branch(branch) => collect_leaves(&branch.children, entries),
            TaxonomyNode::Leaf(motif) => entries.push(motif.to_entry()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Branch, Level, Motif};

    fn leaf(code: &str, parent: &str) -> TaxonomyNode {
        TaxonomyNode::Leaf(Motif {
            code: code.to_string(),
            title: format!("{} title", code),
            parent_key: parent.to_string(),
        })
    }

    fn branch(level: Level, key: &str, children: Vec<TaxonomyNode>) -> TaxonomyNode {
        TaxonomyNode::Branch(Branch {
            level,
            name: Some(key.to_string()),
            range: String::new(),
            key: key.to_string(),
            parent_key: None,
            children,
        })
    }

    #[test]
    fn test_flatten_preserves_document_order() {
        let roots = vec![
            branch(
                Level::Category,
                "A",
                vec![branch(
                    Level::RangeGroup,
                    "A/1",
                    vec![
                        branch(
                            Level::Subgroup,
                            "A/1/x",
                            vec![leaf("A0", "A/1/x"), leaf("A10", "A/1/x")],
                        ),
                        branch(Level::Subgroup, "A/1/y", vec![leaf("A2", "A/1/y")]),
                    ],
                )],
            ),
            branch(
                Level::Category,
                "B",
                vec![branch(
                    Level::RangeGroup,
                    "B/1",
                    vec![branch(Level::Subgroup, "B/1/x", vec![leaf("B0", "B/1/x")])],
                )],
            ),
        ];

        let codes: Vec<String> = flatten_leaves(&roots)
            .into_iter()
            .map(|entry| entry.code)
            .collect();
        assert_eq!(codes, vec!["A0", "A10", "A2", "B0"]);
        assert_eq!(count_leaves(&roots), 4);
    }

    #[test]
    fn test_flatten_empty_forest() {
        assert!(flatten_leaves(&[]).is_empty());
        assert_eq!(count_leaves(&[]), 0);
    }

    #[test]
    fn test_branches_without_leaves_emit_nothing() {
        let roots = vec![branch(Level::Category, "Empty", vec![])];
        assert!(flatten_leaves(&roots).is_empty());
    }
}
