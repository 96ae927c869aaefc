// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Entry comparators.
//!
//! Three modes, picked from the index state:
//!
//! | Mode        | When                    | Primary key            | Tiebreak      |
//! |-------------|-------------------------|------------------------|---------------|
//! | `Score`     | non-empty query active  | score ascending        | title, id     |
//! | `Title`     | no query, sort by title | title ascending        | id            |
//! | `CopyCount` | no query, default       | copy count descending  | title, id     |
//!
//! Title comparison is case-sensitive lexical order. The id tiebreak makes the
//! order total, so sorting is deterministic regardless of map iteration order.

use crate::types::{IndexEntry, SortBy};
use std::cmp::Ordering;

/// Which comparator the index uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    Score,
    Title,
    CopyCount,
}

impl SortMode {
    /// Score mode wins whenever a non-empty query is active; otherwise the
    /// user's sort choice applies.
    pub fn select(active_query: Option<&str>, sort_by: SortBy) -> Self {
        match (active_query, sort_by) {
            (Some(query), _) if !query.is_empty() => SortMode::Score,
            (_, SortBy::Title) => SortMode::Title,
            (_, SortBy::CopyCount) => SortMode::CopyCount,
        }
    }
}

/// Compare two entries under `mode`, ignoring pins.
pub fn compare_entries(a: &IndexEntry, b: &IndexEntry, mode: SortMode) -> Ordering {
    let primary = match mode {
        SortMode::Score => a.score.total_cmp(&b.score),
        SortMode::Title => Ordering::Equal,
        SortMode::CopyCount => b.snippet.copy_count.cmp(&a.snippet.copy_count),
    };
    primary
        .then_with(|| a.snippet.title.cmp(&b.snippet.title))
        .then_with(|| a.snippet.id.cmp(&b.snippet.id))
}

/// Move pinned items to the front, keeping relative order inside both groups.
pub fn partition_pinned<T>(items: Vec<T>, is_pinned: impl Fn(&T) -> bool) -> Vec<T> {
    let (mut pinned, unpinned): (Vec<T>, Vec<T>) = items.into_iter().partition(|item| is_pinned(item));
    pinned.extend(unpinned);
    pinned
}
