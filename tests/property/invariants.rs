//! Index invariants under arbitrary operation sequences.

use super::common::assert_index_well_formed;
use proptest::prelude::*;
use snippet_index::scoring::{compare_entries, partition_pinned, SortMode};
use snippet_index::{IndexEntry, ParsedQuery, PinSet, Snippet, SnippetIndex, SortBy};
use std::collections::HashMap;

// ============================================================================
// STRATEGIES
// ============================================================================

const WORDS: &[&str] = &[
    "docker", "git", "rebase", "shell", "deploy", "café", "résumé", "kubectl", "logs", "prune",
];
const TAGS: &[&str] = &["ops", "dev", "sql", "Ops"];

fn words_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..4).prop_map(|words| words.join(" "))
}

fn snippet_strategy() -> impl Strategy<Value = Snippet> {
    (
        0u8..12,
        words_strategy(),
        words_strategy(),
        prop::collection::vec(prop::sample::select(TAGS), 0..3),
        0u64..20,
    )
        .prop_map(|(id, title, content, tags, copy_count)| Snippet {
            id: format!("id{}", id),
            title,
            content,
            tags: tags.into_iter().map(String::from).collect(),
            copy_count,
        })
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("#".to_string()),
        Just("   ".to_string()),
        words_strategy(),
        (words_strategy(), prop::sample::select(TAGS)).prop_map(|(w, t)| format!("{} #{}", w, t)),
        prop::sample::select(TAGS).prop_map(|t| format!("#{}", t)),
    ]
}

#[derive(Debug, Clone)]
enum Op {
    Init(Vec<Snippet>),
    Upsert(Snippet),
    Search(String),
    Sort(Option<SortBy>),
    TogglePin(u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => prop::collection::vec(snippet_strategy(), 0..10).prop_map(Op::Init),
        3 => snippet_strategy().prop_map(Op::Upsert),
        3 => query_strategy().prop_map(Op::Search),
        1 => prop_oneof![Just(None), Just(Some(SortBy::Title)), Just(Some(SortBy::CopyCount))]
            .prop_map(Op::Sort),
        1 => (0u8..12).prop_map(Op::TogglePin),
    ]
}

// ============================================================================
// MODEL
// ============================================================================

/// What the index should hold: last written snippet per id.
#[derive(Default)]
struct Model {
    snippets: HashMap<String, Snippet>,
}

fn apply(index: &mut SnippetIndex<PinSet>, model: &mut Model, op: &Op) {
    match op {
        Op::Init(snippets) => {
            index.init(snippets.clone());
            model.snippets = snippets
                .iter()
                .map(|snippet| (snippet.id.clone(), snippet.clone()))
                .collect();
        }
        Op::Upsert(snippet) => {
            index.upsert(snippet.clone());
            model.snippets.insert(snippet.id.clone(), snippet.clone());
        }
        Op::Search(query) => index.search(query),
        Op::Sort(sort_by) => {
            index.sort_by(*sort_by);
        }
        Op::TogglePin(id) => {
            index.pins_mut().toggle("store", &format!("id{}", id));
        }
    }
}

/// Order computed from scratch, no caching involved.
fn fresh_order(index: &SnippetIndex<PinSet>) -> Vec<String> {
    let mode = SortMode::select(index.active_query(), index.active_sort_by());
    let mut entries: Vec<IndexEntry> = index.as_array();
    entries.sort_by(|a, b| compare_entries(a, b, mode));
    partition_pinned(entries, |entry| {
        index.pins().is_pinned("store", &entry.snippet.id)
    })
    .into_iter()
    .map(|entry| entry.snippet.id)
    .collect()
}

fn ids(index: &SnippetIndex<PinSet>) -> Vec<String> {
    index
        .as_array()
        .into_iter()
        .map(|entry| entry.snippet.id)
        .collect()
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: every public call leaves the index well formed and holding
    /// exactly the snippets last written.
    #[test]
    fn prop_invariants_hold_after_any_sequence(ops in prop::collection::vec(op_strategy(), 1..30)) {
        let mut index = SnippetIndex::with_pins("store", PinSet::new());
        let mut model = Model::default();

        for op in &ops {
            apply(&mut index, &mut model, op);
            assert_index_well_formed(&index);

            prop_assert_eq!(index.len(), model.snippets.len());
            for (id, snippet) in &model.snippets {
                prop_assert_eq!(index.get(id), Some(snippet));
            }
        }
    }

    /// Property: the cached display order always equals a fresh full sort.
    #[test]
    fn prop_cached_order_matches_fresh_sort(ops in prop::collection::vec(op_strategy(), 1..30)) {
        let mut index = SnippetIndex::with_pins("store", PinSet::new());
        let mut model = Model::default();

        for op in &ops {
            apply(&mut index, &mut model, op);
            // Read twice: the second read comes from the cache
            let first = ids(&index);
            let second = ids(&index);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first, fresh_order(&index));
        }
    }

    /// Property: entries a non-empty query leaves visible carry every queried
    /// tag. Without free text, visibility is exactly the tag test.
    #[test]
    fn prop_visible_entries_have_queried_tags(
        snippets in prop::collection::vec(snippet_strategy(), 0..12),
        query in query_strategy(),
    ) {
        let mut index = SnippetIndex::new("store");
        index.init(snippets);
        index.search(&query);

        let parsed = ParsedQuery::parse(query.trim());
        for entry in index.as_array() {
            if !entry.hidden && !query.trim().is_empty() {
                prop_assert!(entry.snippet.has_all_tags(&parsed.tags));
                prop_assert!(entry.score.is_finite());
            }
            if !parsed.has_free_text() && !query.trim().is_empty() {
                prop_assert_eq!(entry.hidden, !entry.snippet.has_all_tags(&parsed.tags));
            }
        }
    }

    /// Property: an empty query after anything restores full visibility.
    #[test]
    fn prop_empty_query_resets(
        snippets in prop::collection::vec(snippet_strategy(), 0..12),
        query in query_strategy(),
    ) {
        let mut index = SnippetIndex::new("store");
        index.init(snippets);
        index.search(&query);
        index.search("");

        prop_assert_eq!(index.visible_count(), index.len());
        prop_assert!(index.as_array().iter().all(|entry| entry.score.is_infinite()));
    }

    /// Property: pinned entries always form a prefix of the display order.
    #[test]
    fn prop_pins_form_a_prefix(ops in prop::collection::vec(op_strategy(), 1..30)) {
        let mut index = SnippetIndex::with_pins("store", PinSet::new());
        let mut model = Model::default();
        for op in &ops {
            apply(&mut index, &mut model, op);
        }

        let flags: Vec<bool> = index
            .as_array()
            .iter()
            .map(|entry| index.pins().is_pinned("store", &entry.snippet.id))
            .collect();
        let first_unpinned = flags.iter().position(|pinned| !pinned).unwrap_or(flags.len());
        prop_assert!(flags[first_unpinned..].iter().all(|pinned| !pinned));
    }
}
