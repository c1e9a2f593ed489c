// Copyright 2025-present fouille contributors
// SPDX-License-Identifier: Apache-2.0

//! Values that flow out of the ranker.
//!
//! Everything is keyed by corpus *position*, never by content. Two documents
//! with identical text are two entries, and callers map positions back to
//! their own records with a plain index lookup.

use serde::{Deserialize, Serialize};

/// A document's corpus position paired with its relevance weight.
///
/// Weights are unbounded and only meaningful relative to other documents
/// ranked against the same query and corpus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    /// Position of the document in the input corpus.
    pub index: usize,
    /// Accumulated fuzzy TF-IDF weight, zero when nothing matched.
    pub weight: f64,
}

impl ScoredDocument {
    /// Did any query token match this document?
    pub fn is_match(&self) -> bool {
        self.weight > 0.0
    }
}

/// A corpus tokenized once, reusable across queries.
///
/// Batch ranking tokenizes the corpus once and reuses it for every query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenizedCorpus {
    docs: Vec<Vec<String>>,
}

impl TokenizedCorpus {
    /// Normalize every document of `corpus`, preserving order.
    pub fn new<T: AsRef<str>>(corpus: &[T]) -> Self {
        Self {
            docs: corpus
                .iter()
                .map(|doc| crate::tokenize::normalize(doc.as_ref()))
                .collect(),
        }
    }

    /// Token lists, parallel to the original corpus.
    pub fn docs(&self) -> &[Vec<String>] {
        &self.docs
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}
