// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate substring distance.
//!
//! `substring_distance` answers "how close does this pattern come to
//! appearing anywhere in the text?" (Sellers' variant of Levenshtein: the
//! match may start and end at any text position for free). The matcher
//! ignores location, so this is what scores a field.

/// Fewest edits needed to turn `pattern` into some substring of `text`.
///
/// Zero when `pattern` occurs literally. Never exceeds the pattern length
/// (delete every pattern char). The DP runs over pattern positions with the
/// text as the outer loop; row 0 stays zero so a match can begin anywhere.
pub fn substring_distance(pattern: &str, text: &str) -> usize {
    let pattern: Vec<char> = pattern.chars().collect();
    let m = pattern.len();
    if m == 0 {
        return 0;
    }

    let mut column: Vec<usize> = (0..=m).collect();
    let mut best = m;

    for tc in text.chars() {
        let mut diag = column[0];
        column[0] = 0;
        for i in 1..=m {
            let above = column[i];
            let cost = usize::from(pattern[i - 1] != tc);
            column[i] = (diag + cost).min(above + 1).min(column[i - 1] + 1);
            diag = above;
        }
        best = best.min(column[m]);
        if best == 0 {
            return 0;
        }
    }

    best
}

/// `substring_distance` scaled by pattern length into `[0, 1]`.
pub fn substring_score(pattern: &str, text: &str) -> f64 {
    let len = pattern.chars().count();
    if len == 0 {
        return 0.0;
    }
    substring_distance(pattern, text) as f64 / len as f64
}
