// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-user local state: pins and recently opened stores.
//!
//! One small JSON document on disk:
//!
//! ```json
//! {
//!   "pins": { "shell-tricks": ["a1", "b7"] },
//!   "recentStores": [{ "id": "shell-tricks", "title": "Shell Tricks", "description": "" }]
//! }
//! ```
//!
//! The file is a convenience cache. If it is missing or unparseable the state
//! starts empty instead of failing. Writes go to a temp file in the same
//! directory and are renamed into place, so a crash never leaves half a file.

use super::{PinPredicate, PinSet, PinSource};
use crate::error::{Error, Result};
use crate::types::Store;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// How many recent stores are remembered.
pub const RECENT_MAX: usize = 50;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StateData {
    #[serde(default)]
    pins: PinSet,
    #[serde(default)]
    recent_stores: Vec<Store>,
}

/// Pins and recent stores, optionally backed by a file.
#[derive(Debug, Clone, Default)]
pub struct LocalState {
    path: Option<PathBuf>,
    data: StateData,
}

impl LocalState {
    /// State that lives only in memory. `save` is a no-op.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load state from `path`.
    ///
    /// A missing file or invalid JSON yields empty state. Other read errors
    /// (permissions, path is a directory) are reported.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let data = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(data) => data,
                Err(e) => {
                    log::warn!(
                        target: "snippet_index::local_state",
                        "ignoring unreadable state file {}: {}",
                        path.display(),
                        e
                    );
                    StateData::default()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!(target: "snippet_index::local_state", "no state file at {}", path.display());
                StateData::default()
            }
            Err(e) => return Err(Error::io(path, e)),
        };

        Ok(Self {
            path: Some(path),
            data,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Persist to the backing file, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;

        let json = serde_json::to_string_pretty(&self.data).map_err(|e| Error::json(path, e))?;

        let mut temp_file = tempfile::NamedTempFile::new_in(&dir).map_err(|e| Error::io(&dir, e))?;
        temp_file
            .write_all(json.as_bytes())
            .map_err(|e| Error::io(temp_file.path(), e))?;
        temp_file
            .persist(path)
            .map_err(|e| Error::io(path, e.error))?;

        log::debug!(target: "snippet_index::local_state", "saved state to {}", path.display());
        Ok(())
    }

    pub fn pins(&self) -> &PinSet {
        &self.data.pins
    }

    pub fn is_pinned(&self, store_id: &str, snippet_id: &str) -> bool {
        self.data.pins.is_pinned(store_id, snippet_id)
    }

    /// Flip a pin and return whether the snippet is now pinned.
    pub fn toggle_pinned(&mut self, store_id: &str, snippet_id: &str) -> bool {
        let pinned = self.data.pins.toggle(store_id, snippet_id);
        log::debug!(
            target: "snippet_index::local_state",
            "{} {} in {}",
            if pinned { "pin" } else { "unpin" },
            snippet_id,
            store_id
        );
        pinned
    }

    pub fn pinned_ids(&self, store_id: &str) -> Vec<&str> {
        self.data.pins.pinned_ids(store_id)
    }

    /// Most recent first.
    pub fn recent_stores(&self) -> &[Store] {
        &self.data.recent_stores
    }

    /// Move `store` to the front of the recent list, dropping any older entry
    /// with the same id and anything past `RECENT_MAX`.
    pub fn add_recent_store(&mut self, store: Store) {
        let recent = &mut self.data.recent_stores;
        if let Some(pos) = recent.iter().position(|s| s.id == store.id) {
            recent.remove(pos);
        }
        recent.insert(0, store);
        recent.truncate(RECENT_MAX);
    }
}

impl PinSource for LocalState {
    fn pin_predicate(&self, store_id: &str) -> PinPredicate<'_> {
        self.data.pins.pin_predicate(store_id)
    }
}
