// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the edit-distance kernels.
//!
//! Checks the bounds every caller relies on: substring distance never
//! exceeds the pattern length or the whole-string distance, literal
//! occurrences cost nothing, and appending text never makes a match worse.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use snippet_index::fuzzy::{substring_distance, substring_score};

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    pattern: String,
    text: String,
    extra: String,
}

fuzz_target!(|input: DistanceInput| {
    // Cap lengths to avoid timeouts
    let pattern: String = input.pattern.chars().take(40).collect();
    let text: String = input.text.chars().take(120).collect();
    let extra: String = input.extra.chars().take(40).collect();

    let distance = substring_distance(&pattern, &text);
    let pattern_len = pattern.chars().count();

    // INVARIANT 1: deleting the whole pattern is always an option
    assert!(
        distance <= pattern_len,
        "distance {} > pattern length {} for {:?} in {:?}",
        distance,
        pattern_len,
        pattern,
        text
    );

    // INVARIANT 2: the text contains itself
    assert_eq!(substring_distance(&text, &text), 0);
    if text.contains(pattern.as_str()) {
        assert_eq!(distance, 0, "{:?} occurs in {:?}", pattern, text);
    }

    // INVARIANT 3: normalized score stays in [0, 1]
    let score = substring_score(&pattern, &text);
    assert!((0.0..=1.0).contains(&score), "score {} out of range", score);

    // INVARIANT 4: extending the text keeps every earlier alignment available
    let longer = format!("{}{}", text, extra);
    assert!(
        substring_distance(&pattern, &longer) <= distance,
        "appending {:?} worsened {:?} in {:?}",
        extra,
        pattern,
        text
    );
});
