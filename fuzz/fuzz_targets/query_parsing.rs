// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query tokenization.
//!
//! Throws arbitrary text at the tag/free-text splitter and the extended
//! operator parser. Neither may panic, and the split must be lossless in the
//! sense that no produced term contains whitespace or is empty.

#![no_main]

use libfuzzer_sys::fuzz_target;
use snippet_index::fuzzy::pattern::{parse_query, MatchKind, OR_SEPARATOR};
use snippet_index::ParsedQuery;

fuzz_target!(|query: &[u8]| {
    let query = String::from_utf8_lossy(query);
    let query: String = query.chars().take(200).collect();

    let parsed = ParsedQuery::parse(&query);

    // INVARIANT 1: free-text terms are non-empty and hash/whitespace free
    for term in &parsed.free_text {
        assert!(!term.is_empty(), "empty free-text term from {:?}", query);
        assert!(
            !term.contains('#') && !term.contains(char::is_whitespace),
            "free-text term {:?} not split from {:?}",
            term,
            query
        );
    }

    // INVARIANT 2: tags are non-empty and whitespace free
    for tag in &parsed.tags {
        assert!(!tag.is_empty(), "empty tag from {:?}", query);
        assert!(!tag.contains(char::is_whitespace), "tag {:?} holds whitespace", tag);
    }

    // INVARIANT 3: a query made only of whitespace and lone '#' has no terms
    if query.chars().all(|c| c == '#' || c.is_whitespace()) && !query.contains("##") {
        assert!(parsed.is_empty(), "terms from {:?}: {:?}", query, parsed);
    }

    // INVARIANT 4: OR groups are never empty and never hold a bare separator
    for group in parse_query(&parsed.free_text_query()) {
        assert!(!group.is_empty(), "empty OR group from {:?}", query);
        for term in &group {
            assert!(!term.text.is_empty(), "empty matcher term from {:?}", query);
            assert!(
                !(term.kind == MatchKind::Fuzzy && term.text == OR_SEPARATOR),
                "separator kept as a term in {:?}",
                query
            );
        }
    }
});
