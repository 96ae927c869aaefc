// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Extended query syntax for the fuzzy matcher.
//!
//! Each whitespace-separated term may carry an operator:
//!
//! | Token      | Matches a field that…        |
//! |------------|------------------------------|
//! | `jscript`  | fuzzily contains `jscript`   |
//! | `=scheme`  | is exactly `scheme`          |
//! | `'python`  | contains `python`            |
//! | `^java`    | starts with `java`           |
//! | `.js$`     | ends with `.js`              |
//! | `!ruby`    | does not contain `ruby`      |
//! | `!^go`     | does not start with `go`     |
//! | `!.md$`    | does not end with `.md`      |
//!
//! An operator with nothing after it (`'`, `^`, `!`) is read as a plain fuzzy
//! term of the whole token.
//!
//! Terms are AND'd. A standalone `|` token splits the query into OR groups:
//! `^git rebase | stash` matches fields fitting `^git rebase` or `stash`.

use super::levenshtein::substring_score;
use crate::util::normalize;

/// How a term is compared against a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Fuzzy,
    Exact,
    Include,
    Prefix,
    Suffix,
    InverseInclude,
    InversePrefix,
    InverseSuffix,
}

impl MatchKind {
    /// Inverse terms constrain every field instead of scoring one.
    pub fn is_inverse(self) -> bool {
        matches!(
            self,
            MatchKind::InverseInclude | MatchKind::InversePrefix | MatchKind::InverseSuffix
        )
    }
}

/// One parsed query term. `text` is already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub kind: MatchKind,
    pub text: String,
}

impl Term {
    fn new(kind: MatchKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
        }
    }

    /// Parse a single token (no whitespace inside).
    pub fn parse(token: &str) -> Self {
        let (kind, text) = if let Some(rest) = token.strip_prefix("!^") {
            (MatchKind::InversePrefix, rest)
        } else if let Some(rest) = token
            .strip_prefix('!')
            .and_then(|rest| rest.strip_suffix('$'))
        {
            (MatchKind::InverseSuffix, rest)
        } else if let Some(rest) = token.strip_prefix('!') {
            (MatchKind::InverseInclude, rest)
        } else if let Some(rest) = token.strip_prefix('^') {
            (MatchKind::Prefix, rest)
        } else if let Some(rest) = token.strip_prefix('=') {
            (MatchKind::Exact, rest)
        } else if let Some(rest) = token.strip_prefix('\'') {
            (MatchKind::Include, rest)
        } else if let Some(rest) = token.strip_suffix('$') {
            (MatchKind::Suffix, rest)
        } else {
            (MatchKind::Fuzzy, token)
        };

        if text.is_empty() {
            Term::new(MatchKind::Fuzzy, token)
        } else {
            Term::new(kind, text)
        }
    }

    /// Score this term against one normalized field.
    ///
    /// Positive kinds return `Some(score)` when the field matches (lower is
    /// better, `0.0` for literal operators). Inverse kinds return `Some(0.0)`
    /// when the field satisfies the constraint and `None` when it violates it.
    pub fn evaluate(&self, field: &str, threshold: f64) -> Option<f64> {
        let text = self.text.as_str();
        let hit = |matched: bool| matched.then_some(0.0);
        match self.kind {
            MatchKind::Fuzzy => {
                let score = substring_score(text, field);
                (score <= threshold).then_some(score)
            }
            MatchKind::Exact => hit(field == text),
            MatchKind::Include => hit(field.contains(text)),
            MatchKind::Prefix => hit(field.starts_with(text)),
            MatchKind::Suffix => hit(field.ends_with(text)),
            MatchKind::InverseInclude => hit(!field.contains(text)),
            MatchKind::InversePrefix => hit(!field.starts_with(text)),
            MatchKind::InverseSuffix => hit(!field.ends_with(text)),
        }
    }
}

/// Token separating OR groups.
pub const OR_SEPARATOR: &str = "|";

/// Normalize a query and split it into OR groups of AND'd terms.
///
/// Empty groups (leading, trailing or doubled `|`) are dropped.
pub fn parse_query(query: &str) -> Vec<Vec<Term>> {
    let normalized = normalize(query);
    let mut groups = Vec::new();
    let mut current = Vec::new();

    for token in normalized.split_whitespace() {
        if token == OR_SEPARATOR {
            if !current.is_empty() {
                groups.push(std::mem::take(&mut current));
            }
        } else {
            current.push(Term::parse(token));
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }

    groups
}
