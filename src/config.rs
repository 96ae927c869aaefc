// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tunables for the fuzzy matcher and the index.
//!
//! Defaults mirror the matcher configuration the web client shipped with:
//! title weighted 0.7, content 0.4, threshold 0.6, location ignored.
//! Everything is serde-deserializable so a caller can keep it in a JSON file,
//! and every field has a default so partial configs work.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding where local state (pins, recent stores) lives.
pub const STATE_PATH_ENV: &str = "SNIPPET_INDEX_STATE";

/// Default weight of the title key.
pub const DEFAULT_TITLE_WEIGHT: f64 = 0.7;

/// Default weight of the content key.
pub const DEFAULT_CONTENT_WEIGHT: f64 = 0.4;

/// Default acceptance threshold: a field matches a term when
/// `edit_distance / term_length <= threshold`.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Floor applied to zero field scores before weighting, so exact matches in
/// several keys still rank by key weight.
pub const SCORE_EPSILON: f64 = 0.001;

/// Score given to every candidate when the query has no free-text terms.
pub const NEUTRAL_SCORE: f64 = 1.0;

/// Fuzzy matcher configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FuzzyOptions {
    /// Relative weight of the snippet title.
    pub title_weight: f64,
    /// Relative weight of the snippet content.
    pub content_weight: f64,
    /// Maximum normalized edit distance for a field to match a term.
    pub threshold: f64,
}

impl Default for FuzzyOptions {
    fn default() -> Self {
        Self {
            title_weight: DEFAULT_TITLE_WEIGHT,
            content_weight: DEFAULT_CONTENT_WEIGHT,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl FuzzyOptions {
    /// Weights scaled to sum to one, as `(title, content)`.
    ///
    /// Non-positive or non-finite weights are treated as zero. If both end up
    /// zero the keys are weighted equally.
    pub fn normalized_weights(&self) -> (f64, f64) {
        let clean = |w: f64| if w.is_finite() && w > 0.0 { w } else { 0.0 };
        let title = clean(self.title_weight);
        let content = clean(self.content_weight);
        let total = title + content;
        if total == 0.0 {
            (0.5, 0.5)
        } else {
            (title / total, content / total)
        }
    }

    /// Threshold clamped into `[0, 1]`.
    pub fn effective_threshold(&self) -> f64 {
        if self.threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            self.threshold.clamp(0.0, 1.0)
        }
    }
}

/// Index configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexConfig {
    pub fuzzy: FuzzyOptions,
}

/// Local state file location.
///
/// `SNIPPET_INDEX_STATE` if set, else `<data dir>/snippet-index/state.json`,
/// else a file in the working directory.
pub fn default_state_path() -> PathBuf {
    if let Some(path) = std::env::var_os(STATE_PATH_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    dirs::data_local_dir()
        .map(|dir| dir.join("snippet-index").join("state.json"))
        .unwrap_or_else(|| PathBuf::from("snippet-index-state.json"))
}
