//! init / upsert / get.

use super::common::{assert_index_well_formed, ids, make_snippet, visible_ids};
use snippet_index::SnippetIndex;

#[test]
fn test_init_is_idempotent() {
    let snippets = vec![
        make_snippet("a", "alpha", "first").with_copy_count(3),
        make_snippet("b", "beta", "second").with_copy_count(1),
        make_snippet("c", "gamma", "third").with_copy_count(2),
    ];

    let mut index = SnippetIndex::new("store");
    index.init(snippets.clone());
    let first = index.as_array();
    index.init(snippets);
    let second = index.as_array();

    assert_eq!(first, second);
    for entry in &second {
        assert!(!entry.hidden);
        assert_eq!(entry.score, f64::INFINITY);
    }
    assert_index_well_formed(&index);
}

#[test]
fn test_init_forgets_query() {
    let mut index = SnippetIndex::new("store");
    index.init(vec![make_snippet("a", "alpha", ""), make_snippet("b", "beta", "")]);
    index.search("alpha");
    assert_eq!(visible_ids(&index), vec!["a"]);

    index.init(vec![make_snippet("a", "alpha", ""), make_snippet("b", "beta", "")]);
    assert_eq!(index.active_query(), None);
    assert_eq!(index.visible_count(), 2);
    assert_index_well_formed(&index);
}

#[test]
fn test_init_empty_is_safe() {
    let mut index = SnippetIndex::new("store");
    index.init(Vec::new());
    index.search("anything");
    index.sort_by(Some(snippet_index::SortBy::Title));
    assert!(index.as_array().is_empty());
    assert!(index.is_empty());
}

#[test]
fn test_calls_before_init_are_safe() {
    let mut index = SnippetIndex::new("store");
    index.search("#tag text");
    assert!(index.as_array().is_empty());
    assert!(index.get("x").is_none());
}

#[test]
fn test_upsert_preserves_others() {
    let a = make_snippet("a", "alpha", "one");
    let b = make_snippet("b", "beta", "two");
    let c = make_snippet("c", "gamma", "three");

    let mut index = SnippetIndex::new("store");
    index.init(vec![a.clone(), b, c.clone()]);

    let b_prime = make_snippet("b", "beta prime", "two, edited").with_copy_count(7);
    index.upsert(b_prime.clone());

    assert_eq!(index.get("a"), Some(&a));
    assert_eq!(index.get("c"), Some(&c));
    assert_eq!(index.get("b"), Some(&b_prime));
    assert_eq!(index.len(), 3);
    assert_index_well_formed(&index);
}

#[test]
fn test_upsert_inserts_new_id() {
    let mut index = SnippetIndex::new("store");
    index.init(vec![make_snippet("a", "alpha", "")]);
    index.upsert(make_snippet("z", "zeta", ""));

    assert_eq!(index.len(), 2);
    assert!(ids(&index).contains(&"z".to_string()));
    assert_index_well_formed(&index);
}

#[test]
fn test_upsert_is_searchable_by_new_content_only() {
    let mut index = SnippetIndex::new("store");
    index.init(vec![
        make_snippet("a", "note", "kubernetes deployment"),
        make_snippet("b", "other", "nothing here"),
    ]);

    index.upsert(make_snippet("a", "note", "postgres migration"));

    index.search("postgres");
    assert_eq!(visible_ids(&index), vec!["a"]);

    index.search("kubernetes");
    assert!(visible_ids(&index).is_empty());
    assert_index_well_formed(&index);
}

#[test]
fn test_upsert_keeps_visibility_until_next_search() {
    let mut index = SnippetIndex::new("store");
    index.init(vec![
        make_snippet("a", "terraform", ""),
        make_snippet("b", "ansible", ""),
    ]);
    index.search("terraform");
    assert!(index.entry("b").unwrap().hidden);

    // Now matches the query, but stays hidden until the query is re-run
    index.upsert(make_snippet("b", "terraform plan", ""));
    assert!(index.entry("b").unwrap().hidden);

    index.search("terraform");
    assert!(!index.entry("b").unwrap().hidden);
}

#[test]
fn test_get_unknown_id() {
    let mut index = SnippetIndex::new("store");
    index.init(vec![make_snippet("a", "alpha", "")]);
    assert!(index.get("missing").is_none());
    assert!(index.entry("missing").is_none());
}
