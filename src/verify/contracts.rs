// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index contracts.
//!
//! | Contract                    | Invariant                                         |
//! |-----------------------------|---------------------------------------------------|
//! | `check_collection_in_sync`  | map and fuzzy collection hold the same id set     |
//! | `check_visibility`          | hidden or finite score ⇒ a non-empty query active |
//!
//! # Usage
//!
//! ```ignore
//! // In debug builds, this panics if the invariant is violated
//! check_collection_in_sync(&self.entries, &self.collection);
//!
//! // In release builds, this is a no-op
//! ```

use crate::fuzzy::FuzzyCollection;
use crate::types::IndexEntry;
use std::collections::HashMap;

/// The fuzzy collection must mirror the entry map exactly: same size, every
/// collection id present in the map.
///
/// Same size plus inclusion means no duplicates and nothing missing.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_collection_in_sync(entries: &HashMap<String, IndexEntry>, collection: &FuzzyCollection) {
    if cfg!(debug_assertions) {
        debug_assert_eq!(
            entries.len(),
            collection.len(),
            "Contract violation: collection size {} != entry count {}",
            collection.len(),
            entries.len()
        );
        for id in collection.ids() {
            debug_assert!(
                entries.contains_key(id),
                "Contract violation: collection holds unknown id {:?}",
                id
            );
        }
    }
}

/// Entries may only be hidden or carry a finite score while a non-empty
/// query is active.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_visibility(entries: &HashMap<String, IndexEntry>, active_query: Option<&str>) {
    if cfg!(debug_assertions) {
        let filtering = active_query.is_some_and(|q| !q.is_empty());
        if filtering {
            return;
        }
        for (id, entry) in entries {
            debug_assert!(
                !entry.hidden,
                "Contract violation: entry {:?} hidden without an active query",
                id
            );
            debug_assert!(
                entry.score.is_infinite(),
                "Contract violation: entry {:?} scored {} without an active query",
                id,
                entry.score
            );
        }
    }
}
