// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the snippet-index command-line interface.
//!
//! Four subcommands: `search` to load a store dump and print the ordered
//! view, `pin` to toggle a pin in local state, `recent` to list recently
//! opened stores, and `slug` to show the store id a title maps to.

pub mod display;

use clap::{Parser, Subcommand};
use snippet_index::SortBy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "snippet-index",
    about = "Search and order a snippet store's working set",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a store dump and print snippets in display order
    Search {
        /// Path to a store dump (`{ store, snippets }` or a bare snippet array)
        file: PathBuf,

        /// Query: free text plus `#tag` filters. Empty shows everything.
        #[arg(default_value = "")]
        query: String,

        /// Ordering when no query is active (title, copy-count)
        #[arg(short, long)]
        sort: Option<SortBy>,

        /// Also print entries hidden by the query
        #[arg(long)]
        all: bool,

        /// Maximum number of rows to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Store id override for bare snippet arrays
        #[arg(long)]
        store: Option<String>,

        /// Local state file (pins, recent stores)
        #[arg(long, env = "SNIPPET_INDEX_STATE")]
        state: Option<PathBuf>,

        /// Fuzzy acceptance threshold in [0, 1]; lower is stricter
        #[arg(long)]
        threshold: Option<f64>,
    },

    /// Toggle a pin for a snippet in a store
    Pin {
        /// Store id
        store_id: String,

        /// Snippet id
        snippet_id: String,

        /// Local state file (pins, recent stores)
        #[arg(long, env = "SNIPPET_INDEX_STATE")]
        state: Option<PathBuf>,
    },

    /// List recently opened stores, most recent first
    Recent {
        /// Local state file (pins, recent stores)
        #[arg(long, env = "SNIPPET_INDEX_STATE")]
        state: Option<PathBuf>,
    },

    /// Print the store id a title maps to
    Slug {
        /// Store title
        title: String,
    },
}
