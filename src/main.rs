// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Env};
use snippet_index::{
    default_state_path, slugify, FuzzyOptions, IndexConfig, LocalState, SnippetIndex, SortBy,
    StoreDump,
};
use std::path::PathBuf;

mod cli;
use cli::{display, Cli, Commands};

fn init_logger() {
    // RUST_LOG overrides, e.g. RUST_LOG=snippet_index=debug
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search {
            file,
            query,
            sort,
            all,
            limit,
            store,
            state,
            threshold,
        } => run_search(SearchArgs {
            file,
            query,
            sort,
            all,
            limit,
            store,
            state,
            threshold,
        }),
        Commands::Pin {
            store_id,
            snippet_id,
            state,
        } => run_pin(&store_id, &snippet_id, state),
        Commands::Recent { state } => run_recent(state),
        Commands::Slug { title } => {
            println!("{}", slugify(&title));
            Ok(())
        }
    }
}

struct SearchArgs {
    file: PathBuf,
    query: String,
    sort: Option<SortBy>,
    all: bool,
    limit: Option<usize>,
    store: Option<String>,
    state: Option<PathBuf>,
    threshold: Option<f64>,
}

fn open_state(path: Option<PathBuf>) -> Result<LocalState> {
    let path = path.unwrap_or_else(default_state_path);
    LocalState::open(path.clone())
        .with_context(|| format!("failed to open local state {}", path.display()))
}

fn run_search(args: SearchArgs) -> Result<()> {
    let mut dump = StoreDump::load(&args.file)
        .with_context(|| format!("failed to load store dump {}", args.file.display()))?;
    if let Some(store_id) = args.store {
        dump.store.id = store_id;
        dump.validate().context("invalid --store override")?;
    }

    let mut state = open_state(args.state)?;
    state.add_recent_store(dump.store.clone());
    state.save().context("failed to record recent store")?;

    let mut fuzzy = FuzzyOptions::default();
    if let Some(threshold) = args.threshold {
        fuzzy.threshold = threshold;
    }

    let store = dump.store;
    let mut index = SnippetIndex::with_config(store.id.clone(), &state, IndexConfig { fuzzy });
    index.init(dump.snippets);
    let sort_by = index.sort_by(args.sort);
    index.search(&args.query);

    let entries = index.as_array();
    let shown: Vec<_> = entries
        .iter()
        .filter(|entry| args.all || !entry.hidden)
        .take(args.limit.unwrap_or(usize::MAX))
        .collect();

    let label = match index.active_query() {
        Some(query) if !query.is_empty() => format!(
            "{} · \"{}\" · {} of {}",
            store.title,
            query,
            index.visible_count(),
            index.len()
        ),
        _ => format!("{} · {} snippets · by {}", store.title, index.len(), sort_by),
    };

    display::section_top(&label);
    if shown.is_empty() {
        display::row(" no matches");
    }
    for entry in shown {
        let pinned = state.is_pinned(&store.id, &entry.snippet.id);
        display::row(&display::entry_row(entry, pinned));
    }
    display::section_bot();
    Ok(())
}

fn run_pin(store_id: &str, snippet_id: &str, state: Option<PathBuf>) -> Result<()> {
    let mut state = open_state(state)?;
    let pinned = state.toggle_pinned(store_id, snippet_id);
    state.save().context("failed to save pins")?;

    println!(
        "{} {} in {}",
        if pinned { "pinned" } else { "unpinned" },
        snippet_id,
        store_id
    );
    Ok(())
}

fn run_recent(state: Option<PathBuf>) -> Result<()> {
    let state = open_state(state)?;

    display::section_top("Recent stores");
    if state.recent_stores().is_empty() {
        display::row(" none yet");
    }
    for store in state.recent_stores() {
        display::row(&display::store_row(store));
    }
    display::section_bot();
    Ok(())
}
