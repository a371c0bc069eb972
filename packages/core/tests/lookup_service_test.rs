//! Integration tests for LookupService
//!
//! Tests cover:
//! - Flatten length, key convention and idempotence
//! - Find-by-code agreement with a linear scan
//! - Document order across categories and siblings
//! - Navigation queries (ancestors, leaves_under, search)
//! - Concurrent readers sharing one store

use anyhow::Result;
use motif_index_core::{
    count_leaves, LeafEntry, Level, LookupService, TaxonomyBuilder, TaxonomyStore,
};
use std::sync::Arc;
use std::thread;

fn bundled() -> Result<TaxonomyStore> {
    Ok(TaxonomyStore::bundled()?)
}

fn linear_scan<'a>(entries: &'a [LeafEntry], code: &str) -> Option<&'a LeafEntry> {
    entries.iter().find(|entry| entry.code == code)
}

// =========================================================================
// Flatten Tests
// =========================================================================

#[test]
fn test_flatten_length_matches_motif_count() -> Result<()> {
    let store = bundled()?;
    let lookup = LookupService::new(&store);

    let entries = lookup.get_all_leaf_entries();
    assert_eq!(entries.len(), count_leaves(store.roots()));
    assert_eq!(entries.len(), 51);
    Ok(())
}

#[test]
fn test_flattened_keys_equal_codes() -> Result<()> {
    let store = bundled()?;
    let lookup = LookupService::new(&store);

    for entry in lookup.get_all_leaf_entries() {
        assert_eq!(entry.key, entry.code);
        assert_eq!(entry.level, Level::Motif);
    }
    Ok(())
}

#[test]
fn test_flatten_is_idempotent() -> Result<()> {
    let store = bundled()?;
    let lookup = LookupService::new(&store);

    let first: Vec<LeafEntry> = lookup.get_all_leaf_entries().to_vec();
    let second: Vec<LeafEntry> = lookup.get_all_leaf_entries().to_vec();
    assert_eq!(first, second);

    // A second store built from the same source yields the same sequence
    let other = bundled()?;
    assert_eq!(LookupService::new(&other).get_all_leaf_entries(), &first[..]);
    Ok(())
}

#[test]
fn test_category_order_is_preserved() -> Result<()> {
    let store = bundled()?;
    let lookup = LookupService::new(&store);
    let entries = lookup.get_all_leaf_entries();

    let myth = lookup
        .leaves_under("Mythological Motifs")
        .expect("category exists");
    let animals = lookup.leaves_under("Animals").expect("category exists");

    let last_myth = entries
        .iter()
        .position(|entry| entry.code == myth[myth.len() - 1].code)
        .unwrap();
    let first_animal = entries
        .iter()
        .position(|entry| entry.code == animals[0].code)
        .unwrap();
    assert!(last_myth < first_animal);

    // Category prefixes appear in authored order: A, B, C, D
    let prefixes: Vec<char> = entries
        .iter()
        .filter_map(|entry| entry.code.chars().next())
        .fold(Vec::new(), |mut acc, prefix| {
            if acc.last() != Some(&prefix) {
                acc.push(prefix);
            }
            acc
        });
    assert_eq!(prefixes, vec!['A', 'B', 'C', 'D']);
    Ok(())
}

#[test]
fn test_sibling_leaves_keep_order() -> Result<()> {
    let store = TaxonomyBuilder::new()
        .category("Mythological Motifs", "A0-A2899", |c| {
            c.group(Some("Creator"), "A0-A99", |g| {
                g.group(None, "A0-A99", |s| {
                    s.motif("A0", "Creator.").motif("A10", "Nature of the creator.");
                });
            });
        })
        .build()?;
    let lookup = LookupService::new(&store);

    let codes: Vec<&str> = lookup
        .get_all_leaf_entries()
        .iter()
        .map(|entry| entry.code.as_str())
        .collect();
    assert_eq!(codes, vec!["A0", "A10"]);
    Ok(())
}

// =========================================================================
// Find-by-Code Tests
// =========================================================================

#[test]
fn test_find_agrees_with_linear_scan() -> Result<()> {
    let store = bundled()?;
    let lookup = LookupService::new(&store);
    let entries = lookup.get_all_leaf_entries();

    for entry in entries {
        assert_eq!(lookup.find_leaf_by_code(&entry.code), Some(entry));
        assert_eq!(
            lookup.find_leaf_by_code(&entry.code),
            linear_scan(entries, &entry.code)
        );
    }
    Ok(())
}

#[test]
fn test_find_unknown_code_is_absent() -> Result<()> {
    let store = bundled()?;
    let lookup = LookupService::new(&store);

    assert!(lookup.find_leaf_by_code("ZZZZZZ").is_none());
    assert!(lookup.find_leaf_by_code("a0").is_none());
    // Branch keys are not motif codes
    assert!(lookup.find_leaf_by_code("Magic").is_none());
    Ok(())
}

#[test]
fn test_find_known_motifs() -> Result<()> {
    let store = bundled()?;
    let lookup = LookupService::new(&store);

    let deity = lookup.find_leaf_by_code("A100").expect("A100 is bundled");
    assert!(deity.title.starts_with("Deity."));

    let clothes = lookup.find_leaf_by_code("D1050").expect("D1050 is bundled");
    assert_eq!(clothes.title, "Magic clothes.");
    Ok(())
}

// =========================================================================
// Navigation Tests
// =========================================================================

#[test]
fn test_ancestors_form_breadcrumb() -> Result<()> {
    let store = bundled()?;
    let lookup = LookupService::new(&store);

    let chain = lookup.ancestors("A2145").expect("A2145 is bundled");
    let levels: Vec<Level> = chain.iter().map(|branch| branch.level).collect();
    assert_eq!(
        levels,
        vec![Level::Category, Level::RangeGroup, Level::Subgroup]
    );
    assert_eq!(chain[1].name.as_deref(), Some("CREATION OF ANIMAL LIFE"));
    assert_eq!(
        chain[2].name.as_deref(),
        Some("Creation of reptiles and amphibians")
    );
    Ok(())
}

#[test]
fn test_duplicate_ranges_stay_distinct_by_key() -> Result<()> {
    let store = bundled()?;
    let lookup = LookupService::new(&store);

    let parent = lookup
        .find_branch("Mythological Motifs/CREATION OF ANIMAL LIFE")
        .expect("range group exists");
    let duplicated: Vec<&str> = parent
        .children
        .iter()
        .filter_map(|node| node.as_branch())
        .filter(|branch| branch.range == "A2100-A2199")
        .map(|branch| branch.key.as_str())
        .collect();

    assert_eq!(duplicated.len(), 2);
    assert_ne!(duplicated[0], duplicated[1]);
    Ok(())
}

#[test]
fn test_search_returns_document_order() -> Result<()> {
    let store = bundled()?;
    let lookup = LookupService::new(&store);

    let codes: Vec<&str> = lookup
        .search("magic", 100)
        .iter()
        .map(|entry| entry.code.as_str())
        .collect();
    assert_eq!(
        codes,
        vec!["B180", "D50", "D1000", "D1010", "D1050", "D1080"]
    );

    assert_eq!(lookup.search("magic", 2).len(), 2);
    Ok(())
}

// =========================================================================
// Concurrency Tests
// =========================================================================

#[test]
fn test_concurrent_readers() -> Result<()> {
    let store = Arc::new(bundled()?);
    let expected: Vec<LeafEntry> = store.entries().to_vec();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            let expected = expected.clone();
            thread::spawn(move || {
                let lookup = LookupService::new(&store);
                for entry in &expected {
                    assert_eq!(lookup.find_leaf_by_code(&entry.code), Some(entry));
                }
                assert_eq!(lookup.get_all_leaf_entries(), &expected[..]);
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("reader thread panicked");
    }
    Ok(())
}
