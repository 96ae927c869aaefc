// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for index operation sequences.
//!
//! Drives `init`/`upsert`/`search`/`sort_by` and pin toggles in arbitrary
//! order with arbitrary text. Debug builds run the index's own contract
//! checks after every mutation; this target adds the caller-visible ones.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use snippet_index::{PinSet, Snippet, SnippetIndex, SortBy};
use std::collections::HashSet;

#[derive(Debug, Arbitrary)]
struct SnippetInput {
    id: u8,
    title: String,
    content: String,
    tags: Vec<String>,
    copy_count: u16,
}

impl SnippetInput {
    fn into_snippet(self) -> Snippet {
        Snippet {
            id: format!("id{}", self.id % 16),
            title: self.title.chars().take(60).collect(),
            content: self.content.chars().take(200).collect(),
            tags: self.tags.into_iter().take(4).collect(),
            copy_count: u64::from(self.copy_count),
        }
    }
}

#[derive(Debug, Arbitrary)]
enum Operation {
    Init(Vec<SnippetInput>),
    Upsert(SnippetInput),
    Search(String),
    SortByTitle,
    SortByCopyCount,
    TogglePin(u8),
}

fuzz_target!(|ops: Vec<Operation>| {
    let mut index = SnippetIndex::with_pins("fuzz", PinSet::new());

    for op in ops.into_iter().take(64) {
        match op {
            Operation::Init(inputs) => {
                index.init(inputs.into_iter().take(32).map(SnippetInput::into_snippet));
            }
            Operation::Upsert(input) => index.upsert(input.into_snippet()),
            Operation::Search(query) => {
                let query: String = query.chars().take(100).collect();
                index.search(&query);
            }
            Operation::SortByTitle => {
                index.sort_by(Some(SortBy::Title));
            }
            Operation::SortByCopyCount => {
                index.sort_by(Some(SortBy::CopyCount));
            }
            Operation::TogglePin(id) => {
                index.pins_mut().toggle("fuzz", &format!("id{}", id % 16));
            }
        }

        let array = index.as_array();

        // INVARIANT 1: every entry exactly once
        assert_eq!(array.len(), index.len());
        let unique: HashSet<&str> = array.iter().map(|e| e.snippet.id.as_str()).collect();
        assert_eq!(unique.len(), array.len());

        // INVARIANT 2: pinned entries form a prefix
        let first_unpinned = array
            .iter()
            .position(|e| !index.pins().is_pinned("fuzz", &e.snippet.id))
            .unwrap_or(array.len());
        assert!(array[first_unpinned..]
            .iter()
            .all(|e| !index.pins().is_pinned("fuzz", &e.snippet.id)));

        // INVARIANT 3: without a query nothing is hidden
        if index.active_query().map_or(true, str::is_empty) {
            assert!(array.iter().all(|e| !e.hidden));
        }

        // INVARIANT 4: scores are never NaN
        assert!(array.iter().all(|e| !e.score.is_nan()));
    }
});
