// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The loaded-snippet index.
//!
//! Holds the working set of one store: every snippet with its visibility and
//! score under the current query, a fuzzy collection over the same snippets,
//! and the query/sort state. Purely synchronous, no I/O.
//!
//! # Lifecycle
//!
//! ```text
//! new ──init──▶ Loaded ──search(q)──▶ Filtered ──search("")──▶ Loaded
//!                 ▲  │                   │  ▲
//!                 └──┘ upsert / sort_by  └──┘ upsert / sort_by
//! ```
//!
//! # Invariants
//!
//! 1. **IN_SYNC**: the entry map and the fuzzy collection hold the same ids
//!    whenever a public method returns.
//! 2. **VISIBILITY**: `hidden` or a finite `score` only while a non-empty
//!    query is active.
//! 3. **FRESH_ORDER**: every mutating call drops the cached ordering before
//!    returning; pins are never cached.
//!
//! Both 1 and 2 are checked by `verify::contracts` after each mutation.

use crate::config::{IndexConfig, NEUTRAL_SCORE};
use crate::fuzzy::FuzzyCollection;
use crate::pins::{NoPins, PinSource};
use crate::query::ParsedQuery;
use crate::scoring::{compare_entries, partition_pinned, SortMode};
use crate::types::{IndexEntry, SortBy, Snippet};
use crate::verify::contracts::{check_collection_in_sync, check_visibility};
use std::cell::OnceCell;
use std::collections::HashMap;

/// In-memory snippet index for one store.
#[derive(Debug)]
pub struct SnippetIndex<P = NoPins> {
    store_id: String,
    entries: HashMap<String, IndexEntry>,
    collection: FuzzyCollection,
    active_query: Option<String>,
    active_sort_by: SortBy,
    pins: P,
    /// Pin-independent order of ids, rebuilt lazily after a mutation.
    ordering: OnceCell<Vec<String>>,
}

impl SnippetIndex<NoPins> {
    /// An index where nothing is pinned.
    pub fn new(store_id: impl Into<String>) -> Self {
        Self::with_pins(store_id, NoPins)
    }
}

impl<P: PinSource> SnippetIndex<P> {
    pub fn with_pins(store_id: impl Into<String>, pins: P) -> Self {
        Self::with_config(store_id, pins, IndexConfig::default())
    }

    pub fn with_config(store_id: impl Into<String>, pins: P, config: IndexConfig) -> Self {
        Self {
            store_id: store_id.into(),
            entries: HashMap::new(),
            collection: FuzzyCollection::new(config.fuzzy),
            active_query: None,
            active_sort_by: SortBy::default(),
            pins,
            ordering: OnceCell::new(),
        }
    }

    pub fn store_id(&self) -> &str {
        &self.store_id
    }

    pub fn pins(&self) -> &P {
        &self.pins
    }

    /// Mutable access to the pin source. Pin changes show up on the next
    /// `as_array` without touching the index state.
    pub fn pins_mut(&mut self) -> &mut P {
        &mut self.pins
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Last query passed to `search`, trimmed. `Some("")` after a clear.
    pub fn active_query(&self) -> Option<&str> {
        self.active_query.as_deref()
    }

    pub fn active_sort_by(&self) -> SortBy {
        self.active_sort_by
    }

    /// Replace the whole working set.
    ///
    /// Every entry starts visible with an infinite score and the active query
    /// is forgotten. If the input repeats an id, the last value wins.
    pub fn init(&mut self, snippets: impl IntoIterator<Item = Snippet>) {
        let mut entries: HashMap<String, IndexEntry> = HashMap::new();
        let mut order: Vec<String> = Vec::new();
        for snippet in snippets {
            let id = snippet.id.clone();
            if entries.insert(id.clone(), IndexEntry::new(snippet)).is_none() {
                order.push(id);
            }
        }

        log::debug!("init: {} snippets in {}", entries.len(), self.store_id);

        self.collection
            .set_collection(order.iter().map(|id| entries[id].snippet.clone()));
        self.entries = entries;
        self.active_query = None;
        self.finish_mutation();
    }

    /// Insert a new snippet or replace an existing one by id.
    ///
    /// A replaced snippet keeps its current `hidden`/`score` until the next
    /// search. A new one starts visible and unscored.
    pub fn upsert(&mut self, snippet: Snippet) {
        log::debug!("upsert: {}", snippet.id);

        match self.entries.get_mut(&snippet.id) {
            Some(entry) => entry.snippet = snippet.clone(),
            None => {
                self.entries
                    .insert(snippet.id.clone(), IndexEntry::new(snippet.clone()));
            }
        }

        let id = snippet.id.as_str();
        self.collection.remove(|doc| doc.id == id);
        self.collection.add(snippet);
        self.finish_mutation();
    }

    /// Look up a snippet by id.
    pub fn get(&self, id: &str) -> Option<&Snippet> {
        log::trace!("get: {}", id);
        self.entries.get(id).map(|entry| &entry.snippet)
    }

    /// Look up the full entry (snippet, visibility, score) by id.
    pub fn entry(&self, id: &str) -> Option<&IndexEntry> {
        self.entries.get(id)
    }

    /// Apply a query.
    ///
    /// An empty (or all-whitespace) query clears the filter: everything
    /// visible, scores back to infinity. Otherwise every entry is hidden, and
    /// the entries that match the free text (fuzzy) and carry every `#tag`
    /// (exact) are revealed with their match score. Without free text every
    /// snippet is a text match with score 1.
    pub fn search(&mut self, raw_query: &str) {
        let query = raw_query.trim();

        if query.is_empty() {
            log::debug!("clear search");
            self.active_query = Some(String::new());
            self.entries.values_mut().for_each(IndexEntry::reset);
            self.finish_mutation();
            return;
        }

        log::debug!("search: {}", query);
        self.active_query = Some(query.to_string());

        let parsed = ParsedQuery::parse(query);
        for entry in self.entries.values_mut() {
            entry.hidden = true;
        }

        if parsed.has_free_text() {
            let matches = self.collection.search(&parsed.free_text_query());
            log::trace!("{} text matches", matches.len());
            for m in matches {
                if let Some(entry) = self.entries.get_mut(&m.item.id) {
                    if entry.snippet.has_all_tags(&parsed.tags) {
                        entry.hidden = false;
                        entry.score = m.score;
                    }
                }
            }
        } else {
            for entry in self.entries.values_mut() {
                if entry.snippet.has_all_tags(&parsed.tags) {
                    entry.hidden = false;
                    entry.score = NEUTRAL_SCORE;
                }
            }
        }

        self.finish_mutation();
    }

    /// Set the no-query ordering when given one; always return the current one.
    pub fn sort_by(&mut self, new_sort_by: Option<SortBy>) -> SortBy {
        if let Some(sort_by) = new_sort_by {
            log::debug!("sortBy: {}", sort_by);
            self.active_sort_by = sort_by;
            self.ordering.take();
        }
        self.active_sort_by
    }

    /// All entries, hidden ones included, in display order.
    ///
    /// Pinned snippets come first. Within each group the order is by score
    /// while a non-empty query is active, else by the chosen sort. Callers
    /// use `hidden` to suppress entries, not to drop them.
    pub fn as_array(&self) -> Vec<IndexEntry> {
        log::trace!("asArray");

        let order = self.ordering.get_or_init(|| self.compute_ordering());
        let is_pinned = self.pins.pin_predicate(&self.store_id);

        let entries: Vec<IndexEntry> = order
            .iter()
            .filter_map(|id| self.entries.get(id).cloned())
            .collect();
        partition_pinned(entries, |entry| is_pinned(entry.snippet.id.as_str()))
    }

    /// Number of entries not hidden by the current query.
    pub fn visible_count(&self) -> usize {
        self.entries.values().filter(|entry| !entry.hidden).count()
    }

    fn sort_mode(&self) -> SortMode {
        SortMode::select(self.active_query(), self.active_sort_by)
    }

    fn compute_ordering(&self) -> Vec<String> {
        let mode = self.sort_mode();
        let mut entries: Vec<&IndexEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| compare_entries(a, b, mode));
        entries.into_iter().map(|entry| entry.snippet.id.clone()).collect()
    }

    fn finish_mutation(&mut self) {
        self.ordering.take();
        check_collection_in_sync(&self.entries, &self.collection);
        check_visibility(&self.entries, self.active_query.as_deref());
    }
}
