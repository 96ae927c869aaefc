// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The searchable document set behind the index.
//!
//! A flat `Vec` of snippets with their title and content pre-normalized. The
//! working set is a few hundred snippets, so every search is a linear scan;
//! what matters is that adds and removes keep the set exactly in step with
//! the index's own map.
//!
//! # Scoring
//!
//! Per positive term, each key that matches contributes
//! `max(field_score, ε) ^ weight` (weights normalized to sum to one), and the
//! contributions multiply. A term matching in both keys therefore scores
//! better than one matching in the title alone, which in turn beats content
//! alone. The document score is the mean over positive terms. Inverse terms
//! only filter.

use super::pattern::{parse_query, Term};
use crate::config::{FuzzyOptions, SCORE_EPSILON};
use crate::types::Snippet;
use crate::util::normalize;

/// A snippet plus its normalized searchable text.
#[derive(Debug, Clone)]
struct Document {
    item: Snippet,
    title: String,
    content: String,
}

impl Document {
    fn new(item: Snippet) -> Self {
        let title = normalize(&item.title);
        let content = normalize(&item.content);
        Self {
            item,
            title,
            content,
        }
    }
}

/// One search hit. Lower `score` is a better match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatch<'a> {
    pub item: &'a Snippet,
    pub score: f64,
}

/// Fuzzy-searchable snippet collection.
#[derive(Debug, Clone, Default)]
pub struct FuzzyCollection {
    docs: Vec<Document>,
    options: FuzzyOptions,
}

impl FuzzyCollection {
    pub fn new(options: FuzzyOptions) -> Self {
        Self {
            docs: Vec::new(),
            options,
        }
    }

    /// Replace the whole collection.
    pub fn set_collection(&mut self, items: impl IntoIterator<Item = Snippet>) {
        self.docs = items.into_iter().map(Document::new).collect();
    }

    /// Append one document.
    pub fn add(&mut self, item: Snippet) {
        self.docs.push(Document::new(item));
    }

    /// Remove every document the predicate selects. Returns how many went.
    ///
    /// Callers match on `id`: an edited snippet is not equal to its previous
    /// value, so value equality would leave the stale copy behind.
    pub fn remove(&mut self, mut predicate: impl FnMut(&Snippet) -> bool) -> usize {
        let before = self.docs.len();
        self.docs.retain(|doc| !predicate(&doc.item));
        before - self.docs.len()
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.docs.iter().any(|doc| doc.item.id == id)
    }

    /// Ids in collection order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.docs.iter().map(|doc| doc.item.id.as_str())
    }

    /// Search the collection, best match first.
    ///
    /// Ties keep collection order. A query with no terms matches nothing.
    /// With `|` groups, the first group a document satisfies gives its score.
    pub fn search(&self, query: &str) -> Vec<FuzzyMatch<'_>> {
        let groups = parse_query(query);
        if groups.is_empty() {
            return Vec::new();
        }

        let weights = self.options.normalized_weights();
        let threshold = self.options.effective_threshold();

        let mut matches: Vec<FuzzyMatch<'_>> = self
            .docs
            .iter()
            .filter_map(|doc| {
                groups
                    .iter()
                    .find_map(|terms| score_document(doc, terms, weights, threshold))
                    .map(|score| FuzzyMatch {
                        item: &doc.item,
                        score,
                    })
            })
            .collect();

        // Stable: equal scores stay in collection order
        matches.sort_by(|a, b| a.score.total_cmp(&b.score));
        matches
    }
}

/// Score one document against all terms, or `None` if any term rejects it.
fn score_document(
    doc: &Document,
    terms: &[Term],
    (title_weight, content_weight): (f64, f64),
    threshold: f64,
) -> Option<f64> {
    let keys = [
        (doc.title.as_str(), title_weight),
        (doc.content.as_str(), content_weight),
    ];

    let mut total = 0.0;
    let mut positive = 0usize;

    for term in terms {
        if term.kind.is_inverse() {
            if keys
                .iter()
                .any(|(field, _)| term.evaluate(field, threshold).is_none())
            {
                return None;
            }
            continue;
        }

        let mut matched = false;
        let mut term_score = 1.0;
        for (field, weight) in keys {
            if let Some(score) = term.evaluate(field, threshold) {
                matched = true;
                term_score *= score.max(SCORE_EPSILON).powf(weight);
            }
        }
        if !matched {
            return None;
        }
        total += term_score;
        positive += 1;
    }

    if positive == 0 {
        Some(SCORE_EPSILON)
    } else {
        Some(total / positive as f64)
    }
}
