// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The values the index works with.
//!
//! `Snippet` and `Store` are owned by the storage layer and arrive as JSON from
//! the REST API, so they serialize in camelCase. The index never mutates them;
//! an edit is an `upsert` of a whole new value.
//!
//! `IndexEntry` is the index's own record: the snippet plus its visibility and
//! match score under the current query.
//!
//! # Invariants
//!
//! - **IndexEntry**: `hidden` implies a non-empty query is active.
//! - **IndexEntry**: `score` is finite only while a non-empty query is active.
//!   `f64::INFINITY` means "not filtered".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A short text snippet belonging to a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    /// Stable unique identifier.
    pub id: String,
    pub title: String,
    pub content: String,
    /// Ordered tag list. Tag search is an exact, case-sensitive membership test.
    #[serde(default)]
    pub tags: Vec<String>,
    /// How many times the snippet has been copied.
    #[serde(default)]
    pub copy_count: u64,
}

impl Snippet {
    /// Builder-style copy count override.
    pub fn with_copy_count(mut self, copy_count: u64) -> Self {
        self.copy_count = copy_count;
        self
    }

    /// Builder-style tag list override.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Does this snippet carry every tag in `tags`?
    pub fn has_all_tags<'a>(&self, tags: impl IntoIterator<Item = &'a String>) -> bool {
        tags.into_iter().all(|tag| self.tags.contains(tag))
    }
}

/// A named group of snippets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Index record: a snippet with its visibility and score under the active query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexEntry {
    pub snippet: Snippet,
    /// Excluded from the current search result, still present in the index.
    pub hidden: bool,
    /// Fuzzy match distance, lower is better. `INFINITY` when no query is active.
    pub score: f64,
}

impl IndexEntry {
    /// A fresh, unfiltered entry.
    pub fn new(snippet: Snippet) -> Self {
        Self {
            snippet,
            hidden: false,
            score: f64::INFINITY,
        }
    }

    /// Reset visibility and score to the "no query" state.
    pub fn reset(&mut self) {
        self.hidden = false;
        self.score = f64::INFINITY;
    }
}

/// Ordering used when no query is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    /// Ascending title.
    Title,
    /// Descending copy count, ties by ascending title.
    #[default]
    CopyCount,
}

impl SortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Title => "title",
            SortBy::CopyCount => "copyCount",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(SortBy::Title),
            "copyCount" | "copy-count" | "copy_count" => Ok(SortBy::CopyCount),
            other => Err(format!("unknown sort order: {}", other)),
        }
    }
}
