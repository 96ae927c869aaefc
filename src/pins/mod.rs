// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pins: per-store "keep this snippet on top" flags.
//!
//! Pins are not part of the index. They belong to the user's local state and
//! can change between two renders, so the index asks a `PinSource` for a
//! fresh predicate on every `as_array` call and never holds on to it.

mod local_state;

pub use local_state::{LocalState, RECENT_MAX};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Answers "is this snippet id pinned?" for one store.
pub type PinPredicate<'a> = Box<dyn Fn(&str) -> bool + 'a>;

/// Anything that knows which snippets are pinned in which store.
pub trait PinSource {
    /// Predicate over snippet ids for `store_id`.
    fn pin_predicate(&self, store_id: &str) -> PinPredicate<'_>;
}

impl<T: PinSource + ?Sized> PinSource for &T {
    fn pin_predicate(&self, store_id: &str) -> PinPredicate<'_> {
        (**self).pin_predicate(store_id)
    }
}

/// Nothing is ever pinned.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPins;

impl PinSource for NoPins {
    fn pin_predicate(&self, _store_id: &str) -> PinPredicate<'_> {
        Box::new(|_: &str| false)
    }
}

/// In-memory pin table: store id → pinned snippet ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinSet {
    stores: BTreeMap<String, BTreeSet<String>>,
}

impl PinSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pinned(&self, store_id: &str, snippet_id: &str) -> bool {
        self.stores
            .get(store_id)
            .is_some_and(|ids| ids.contains(snippet_id))
    }

    pub fn pin(&mut self, store_id: &str, snippet_id: &str) {
        self.stores
            .entry(store_id.to_string())
            .or_default()
            .insert(snippet_id.to_string());
    }

    pub fn unpin(&mut self, store_id: &str, snippet_id: &str) {
        if let Some(ids) = self.stores.get_mut(store_id) {
            ids.remove(snippet_id);
            if ids.is_empty() {
                self.stores.remove(store_id);
            }
        }
    }

    /// Flip the pin and return the new state.
    pub fn toggle(&mut self, store_id: &str, snippet_id: &str) -> bool {
        if self.is_pinned(store_id, snippet_id) {
            self.unpin(store_id, snippet_id);
            false
        } else {
            self.pin(store_id, snippet_id);
            true
        }
    }

    /// Pinned ids of one store, sorted.
    pub fn pinned_ids(&self, store_id: &str) -> Vec<&str> {
        self.stores
            .get(store_id)
            .map(|ids| ids.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

impl PinSource for PinSet {
    fn pin_predicate(&self, store_id: &str) -> PinPredicate<'_> {
        let ids = self.stores.get(store_id);
        Box::new(move |snippet_id: &str| ids.is_some_and(|ids| ids.contains(snippet_id)))
    }
}
