// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Store dumps: the `{ store, snippets }` payload the REST API returns for a
//! store page, saved to a file.
//!
//! A bare JSON array of snippets is accepted too; the store is then named
//! after the file.

use crate::error::{Error, Result};
use crate::types::{Snippet, Store};
use crate::util::slugify;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// One store with its snippets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreDump {
    pub store: Store,
    #[serde(default)]
    pub snippets: Vec<Snippet>,
}

impl StoreDump {
    /// Read and validate a dump file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| Error::json(path, e))?;

        // A struct also deserializes from a sequence; `[snippet]` is a bare array.
        let dump = if value.is_array() {
            let snippets: Vec<Snippet> =
                serde_json::from_value(value).map_err(|e| Error::json(path, e))?;
            let title = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or_default()
                .to_string();
            StoreDump {
                store: Store {
                    id: slugify(&title),
                    title,
                    description: String::new(),
                },
                snippets,
            }
        } else {
            serde_json::from_value(value).map_err(|e| Error::json(path, e))?
        };

        dump.validate()?;
        log::debug!(
            "loaded {} snippets for store {} from {}",
            dump.snippets.len(),
            dump.store.id,
            path.display()
        );
        Ok(dump)
    }

    /// Reject dumps the index cannot key on.
    ///
    /// Repeated snippet ids are allowed (the index keeps the last one) but logged.
    pub fn validate(&self) -> Result<()> {
        if self.store.id.is_empty() {
            return Err(Error::InvalidStoreDump {
                reason: "store id is empty".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for (position, snippet) in self.snippets.iter().enumerate() {
            if snippet.id.is_empty() {
                return Err(Error::InvalidStoreDump {
                    reason: format!("snippet at position {} has an empty id", position),
                });
            }
            if !seen.insert(snippet.id.as_str()) {
                log::warn!("duplicate snippet id {} in store {}", snippet.id, self.store.id);
            }
        }
        Ok(())
    }
}
