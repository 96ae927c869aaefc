// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ordering of index entries.
//!
//! Pins dominate everything: a pinned snippet sorts before every unpinned one
//! no matter its score, title or copy count. Inside each pin group the active
//! mode decides. Pins live outside the index and may change between renders,
//! so they are applied last, as a stable partition over the mode ordering.

pub mod ranking;

pub use ranking::{compare_entries, partition_pinned, SortMode};
