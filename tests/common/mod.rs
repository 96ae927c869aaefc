//! Shared test utilities and fixtures.

#![allow(dead_code)]

use snippet_index::{PinSource, Snippet, SnippetIndex, StoreDump};

// Re-export canonical test utilities from snippet_index::testing
pub use snippet_index::testing::{make_entry, make_snippet, make_store, make_tagged};

// ============================================================================
// FIXTURES
// ============================================================================

/// Store dump with a dozen shell snippets, two of them tagged `docker`.
pub const SHELL_FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/shell.json");

pub fn load_shell_fixture() -> StoreDump {
    StoreDump::load(SHELL_FIXTURE).expect("shell fixture should load")
}

/// The two snippets from the Zebra/Apple walkthrough.
pub fn zebra_apple() -> Vec<Snippet> {
    vec![
        make_tagged("1", "Zebra", &["a"]).with_copy_count(5),
        make_tagged("2", "Apple", &["a"]).with_copy_count(9),
    ]
}

// ============================================================================
// VIEW HELPERS
// ============================================================================

/// Ids in display order, hidden entries included.
pub fn ids<P: PinSource>(index: &SnippetIndex<P>) -> Vec<String> {
    index
        .as_array()
        .into_iter()
        .map(|entry| entry.snippet.id)
        .collect()
}

/// Ids of non-hidden entries in display order.
pub fn visible_ids<P: PinSource>(index: &SnippetIndex<P>) -> Vec<String> {
    index
        .as_array()
        .into_iter()
        .filter(|entry| !entry.hidden)
        .map(|entry| entry.snippet.id)
        .collect()
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Check the state any index must be in after a public call returns.
///
/// - `as_array` holds each id exactly once and agrees with `len`
/// - every entry is reachable through `get`/`entry`
/// - hidden entries and finite scores only appear under a non-empty query
pub fn assert_index_well_formed<P: PinSource>(index: &SnippetIndex<P>) {
    let entries = index.as_array();
    assert_eq!(entries.len(), index.len(), "as_array must list every entry");

    let mut seen = std::collections::HashSet::new();
    for entry in &entries {
        assert!(
            seen.insert(entry.snippet.id.clone()),
            "duplicate id {} in as_array",
            entry.snippet.id
        );
        assert_eq!(index.entry(&entry.snippet.id), Some(entry));
    }

    let query_active = index.active_query().is_some_and(|q| !q.is_empty());
    if !query_active {
        for entry in &entries {
            assert!(!entry.hidden, "entry {} hidden without a query", entry.snippet.id);
            assert!(
                entry.score.is_infinite(),
                "entry {} scored without a query",
                entry.snippet.id
            );
        }
    }
}
