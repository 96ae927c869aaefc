//! Pins and recent stores persisted to disk.

use super::common::make_store;
use snippet_index::pins::RECENT_MAX;
use snippet_index::{LocalState, PinSource};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_opens_empty() {
    let dir = TempDir::new().unwrap();
    let state = LocalState::open(dir.path().join("state.json")).unwrap();
    assert!(state.recent_stores().is_empty());
    assert!(state.pinned_ids("any").is_empty());
}

#[test]
fn test_roundtrip_through_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("state.json");

    let mut state = LocalState::open(&path).unwrap();
    state.toggle_pinned("shell", "s1");
    state.toggle_pinned("shell", "s2");
    state.toggle_pinned("sql", "q9");
    state.add_recent_store(make_store("shell", "Shell"));
    state.add_recent_store(make_store("sql", "SQL"));
    state.save().unwrap();

    let reopened = LocalState::open(&path).unwrap();
    assert!(reopened.is_pinned("shell", "s1"));
    assert!(reopened.is_pinned("shell", "s2"));
    assert!(reopened.is_pinned("sql", "q9"));
    assert!(!reopened.is_pinned("sql", "s1"));

    let recent: Vec<&str> = reopened
        .recent_stores()
        .iter()
        .map(|store| store.id.as_str())
        .collect();
    assert_eq!(recent, vec!["sql", "shell"]);
}

#[test]
fn test_file_layout_is_camel_case_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");

    let mut state = LocalState::open(&path).unwrap();
    state.toggle_pinned("shell", "s1");
    state.add_recent_store(make_store("shell", "Shell"));
    state.save().unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["pins"]["shell"][0], "s1");
    assert_eq!(json["recentStores"][0]["id"], "shell");
}

#[test]
fn test_unpin_is_persisted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");

    let mut state = LocalState::open(&path).unwrap();
    assert!(state.toggle_pinned("shell", "s1"));
    state.save().unwrap();

    let mut state = LocalState::open(&path).unwrap();
    assert!(!state.toggle_pinned("shell", "s1"));
    state.save().unwrap();

    let state = LocalState::open(&path).unwrap();
    assert!(!state.is_pinned("shell", "s1"));
}

#[test]
fn test_corrupt_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    fs::write(&path, "{ not json").unwrap();

    let mut state = LocalState::open(&path).unwrap();
    assert!(state.recent_stores().is_empty());

    // Saving replaces the corrupt file
    state.add_recent_store(make_store("shell", "Shell"));
    state.save().unwrap();
    let state = LocalState::open(&path).unwrap();
    assert_eq!(state.recent_stores().len(), 1);
}

#[test]
fn test_directory_path_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(LocalState::open(dir.path()).is_err());
}

#[test]
fn test_recent_stores_capped_and_deduplicated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");

    let mut state = LocalState::open(&path).unwrap();
    for i in 0..(RECENT_MAX + 10) {
        state.add_recent_store(make_store(&format!("store-{}", i), "Store"));
    }
    state.add_recent_store(make_store("store-20", "Store renamed"));
    state.save().unwrap();

    let state = LocalState::open(&path).unwrap();
    let recent = state.recent_stores();
    assert_eq!(recent.len(), RECENT_MAX);
    assert_eq!(recent[0].id, "store-20");
    assert_eq!(recent[0].title, "Store renamed");
    assert_eq!(recent.iter().filter(|store| store.id == "store-20").count(), 1);
    assert_eq!(recent[1].id, format!("store-{}", RECENT_MAX + 9));
}

#[test]
fn test_pin_predicate_reads_current_pins() {
    let mut state = LocalState::in_memory();
    state.toggle_pinned("shell", "s1");

    let is_pinned = state.pin_predicate("shell");
    assert!(is_pinned("s1"));
    assert!(!is_pinned("s2"));

    let other = state.pin_predicate("sql");
    assert!(!other("s1"));
}

#[test]
fn test_in_memory_save_is_noop() {
    let mut state = LocalState::in_memory();
    state.toggle_pinned("shell", "s1");
    assert!(state.save().is_ok());
    assert!(state.path().is_none());
}
