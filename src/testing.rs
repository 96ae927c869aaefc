//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{IndexEntry, Snippet, Store};

/// Create an untagged snippet with zero copies.
///
/// This is the canonical implementation used across all tests.
pub fn make_snippet(id: &str, title: &str, content: &str) -> Snippet {
    Snippet {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        tags: vec![],
        copy_count: 0,
    }
}

/// Create a snippet with tags and empty content.
pub fn make_tagged(id: &str, title: &str, tags: &[&str]) -> Snippet {
    make_snippet(id, title, "").with_tags(tags.iter().copied())
}

/// Create an index entry with a given copy count and score.
pub fn make_entry(id: &str, title: &str, copy_count: u64, score: f64) -> IndexEntry {
    IndexEntry {
        snippet: make_snippet(id, title, "").with_copy_count(copy_count),
        hidden: false,
        score,
    }
}

/// Create a store with an empty description.
pub fn make_store(id: &str, title: &str) -> Store {
    Store {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
    }
}
