// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query tokenization: tag terms vs free text.
//!
//! A query is split into whitespace-delimited terms. A term starting with `#`
//! is a tag filter; anything else is free text for the fuzzy matcher. The
//! `#` is a hard delimiter on the free-text side, so:
//!
//! | Query          | Free text     | Tags          |
//! |----------------|---------------|---------------|
//! | `docker #ops`  | `docker`      | `ops`         |
//! | `#a #b`        |               | `a`, `b`      |
//! | `foo#bar`      | `foo`         | `bar`         |
//! | `##x`          |               | `#x`          |
//! | `#`            |               |               |
//!
//! A lone `#` yields no term at all. Such a query still counts as non-empty
//! in the index and matches everything with the neutral score.

use std::collections::BTreeSet;

/// A tokenized query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Tag names (without the leading `#`). Every one must be present.
    pub tags: BTreeSet<String>,
    /// Free-text terms in query order.
    pub free_text: Vec<String>,
}

impl ParsedQuery {
    /// Tokenize a query. Never fails; unrecognizable input just yields fewer terms.
    pub fn parse(query: &str) -> Self {
        let mut parsed = ParsedQuery::default();
        let mut chars = query.char_indices().peekable();

        while let Some(&(start, c)) = chars.peek() {
            if c.is_whitespace() {
                chars.next();
                continue;
            }

            if c == '#' {
                chars.next();
                let tag_start = start + c.len_utf8();
                let mut end = tag_start;
                while let Some(&(i, c)) = chars.peek() {
                    if c.is_whitespace() {
                        break;
                    }
                    end = i + c.len_utf8();
                    chars.next();
                }
                if end > tag_start {
                    parsed.tags.insert(query[tag_start..end].to_string());
                }
            } else {
                let mut end = start;
                while let Some(&(i, c)) = chars.peek() {
                    if c.is_whitespace() || c == '#' {
                        break;
                    }
                    end = i + c.len_utf8();
                    chars.next();
                }
                parsed.free_text.push(query[start..end].to_string());
            }
        }

        parsed
    }

    /// Free-text terms joined with single spaces, as handed to the matcher.
    pub fn free_text_query(&self) -> String {
        self.free_text.join(" ")
    }

    pub fn has_free_text(&self) -> bool {
        !self.free_text.is_empty()
    }

    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.free_text.is_empty()
    }
}
