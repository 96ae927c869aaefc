//! Edit-distance kernels against reference implementations.

use proptest::prelude::*;
use snippet_index::fuzzy::{substring_distance, substring_score};

/// Substring distance by brute force: the best full Levenshtein distance
/// between `pattern` and any substring of `text` (the empty one included).
fn substring_distance_oracle(pattern: &str, text: &str) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut best = pattern.chars().count();
    for start in 0..=chars.len() {
        for end in start..=chars.len() {
            let candidate: String = chars[start..end].iter().collect();
            best = best.min(strsim::levenshtein(pattern, &candidate));
        }
    }
    best
}

fn short_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-dé]{0,7}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: Sellers' DP finds the same optimum as trying every substring.
    #[test]
    fn prop_substring_distance_matches_oracle(pattern in short_word(), text in short_word()) {
        prop_assert_eq!(
            substring_distance(&pattern, &text),
            substring_distance_oracle(&pattern, &text)
        );
    }

    /// Property: a literal occurrence always scores zero.
    #[test]
    fn prop_embedded_pattern_scores_zero(prefix in short_word(), pattern in short_word(), suffix in short_word()) {
        let text = format!("{}{}{}", prefix, pattern, suffix);
        prop_assert_eq!(substring_distance(&pattern, &text), 0);
    }

    /// Property: scores stay within [0, 1].
    #[test]
    fn prop_substring_score_is_normalized(pattern in short_word(), text in short_word()) {
        let score = substring_score(&pattern, &text);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    /// Property: the substring distance never exceeds the whole-string distance.
    #[test]
    fn prop_substring_distance_bounded_by_full(pattern in short_word(), text in short_word()) {
        prop_assert!(substring_distance(&pattern, &text) <= strsim::levenshtein(&pattern, &text));
    }

    /// Property: more text around the field never makes the match worse.
    #[test]
    fn prop_longer_text_never_worse(pattern in short_word(), text in short_word(), extra in short_word()) {
        let longer = format!("{}{}", text, extra);
        prop_assert!(substring_distance(&pattern, &longer) <= substring_distance(&pattern, &text));
    }
}
