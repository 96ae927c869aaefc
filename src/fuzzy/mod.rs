// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! `levenshtein` holds the distance functions, `pattern` the extended query
//! syntax, and `collection` the document set the index searches. Scores
//! follow one convention throughout: `0.0` is a perfect match, `1.0` the
//! worst that still counts, lower sorts first.

mod collection;
mod levenshtein;
pub mod pattern;

pub use collection::{FuzzyCollection, FuzzyMatch};
pub use levenshtein::*;
