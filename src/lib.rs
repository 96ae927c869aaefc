// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory snippet index with fuzzy + tag search and pin-aware ordering.
//!
//! The index holds the already-fetched working set of one snippet store and
//! answers three questions for a UI: which snippets match the current query,
//! how well, and in what order to show them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  query      │────▶│  index       │────▶│  scoring     │
//! │ (#tags vs   │     │ (SnippetIndex│     │ (comparators,│
//! │  free text) │     │  entries)    │     │  pin split)  │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                            │                    ▲
//!                            ▼                    │
//!                     ┌──────────────┐     ┌──────────────┐
//!                     │  fuzzy       │     │  pins        │
//!                     │ (collection, │     │ (PinSource,  │
//!                     │  edit dist.) │     │  LocalState) │
//!                     └──────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use snippet_index::{SnippetIndex, Snippet, SortBy};
//!
//! let mut index = SnippetIndex::new("recipes");
//! index.init(vec![
//!     Snippet { id: "1".into(), title: "Zebra".into(), content: String::new(), tags: vec!["a".into()], copy_count: 5 },
//!     Snippet { id: "2".into(), title: "Apple".into(), content: String::new(), tags: vec!["a".into()], copy_count: 9 },
//! ]);
//!
//! index.sort_by(Some(SortBy::Title));
//! let ids: Vec<_> = index.as_array().into_iter().map(|e| e.snippet.id).collect();
//! assert_eq!(ids, ["2", "1"]);
//!
//! index.search("#a");
//! assert!(index.as_array().iter().all(|e| !e.hidden && e.score == 1.0));
//! ```

pub mod config;
pub mod dump;
pub mod error;
pub mod fuzzy;
mod index;
pub mod pins;
pub mod query;
pub mod scoring;
pub mod testing;
mod types;
mod util;
pub mod verify;

// Re-exports for public API
pub use config::{default_state_path, FuzzyOptions, IndexConfig};
pub use dump::StoreDump;
pub use error::{Error, Result};
pub use fuzzy::{FuzzyCollection, FuzzyMatch};
pub use index::SnippetIndex;
pub use pins::{LocalState, NoPins, PinPredicate, PinSet, PinSource};
pub use query::ParsedQuery;
pub use types::{IndexEntry, Snippet, SortBy, Store};
pub use util::{normalize, slugify};
