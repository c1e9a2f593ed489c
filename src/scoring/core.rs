// Copyright 2025-present fouille contributors
// SPDX-License-Identifier: Apache-2.0

//! The math behind document weights.
//!
//! For one query token `q` against a corpus of `N` tokenized documents:
//!
//! ```text
//! occ(d, q) = #{ t ∈ d : similarity(q, t) > threshold }     (positions, not types)
//! df(q)     = #{ d : occ(d, q) > 0 }
//! TF(d, q)  = log10(1 + occ(d, q) / |d|)
//! IDF(q)    = log10(N / df(q))
//!
//! weight(d) += Σ_{t ∈ d, t matches q} (TF(d, q) + IDF(q)) × similarity(q, t)
//! ```
//!
//! The sum runs over matching *positions*, so `(TF + IDF)` is added once per
//! occurrence on top of TF already counting occurrences. A document repeating
//! a word is rewarded twice for it. Rankings depend on this; keep one term per
//! matching position.
//!
//! A query token with `df = 0` contributes nothing, which also keeps `N / df`
//! away from a division by zero. An empty document never matches anything, so
//! `occ / |d|` is never evaluated with `|d| = 0`.

use tracing::trace;

use crate::contracts::check_weights_valid;
use crate::fuzzy::match_score;

/// Term frequency of a query token in one document, dampened by its length.
///
/// `doc_len` must be non-zero; callers only ask for documents with at least
/// one match.
pub fn term_frequency(occurrences: usize, doc_len: usize) -> f64 {
    (1.0 + occurrences as f64 / doc_len as f64).log10()
}

/// Inverse document frequency: how rare the token's fuzzy matches are.
///
/// `doc_freq` must be non-zero. Zero when every document matches.
pub fn inverse_document_frequency(corpus_len: usize, doc_freq: usize) -> f64 {
    (corpus_len as f64 / doc_freq as f64).log10()
}

/// Similarity of every position in `doc` that fuzzily matches `query_token`.
///
/// The length of the result is `occ(d, q)`.
pub fn matching_positions(query_token: &str, doc: &[String], threshold: f64) -> Vec<f64> {
    doc.iter()
        .filter_map(|token| match_score(query_token, token, threshold))
        .collect()
}

/// Add one query token's contributions to the running weights.
///
/// `weights` and `docs` are parallel: `weights[i]` belongs to `docs[i]`.
pub fn accumulate_token(
    weights: Vec<f64>,
    query_token: &str,
    docs: &[Vec<String>],
    threshold: f64,
) -> Vec<f64> {
    let matches: Vec<Vec<f64>> = docs
        .iter()
        .map(|doc| matching_positions(query_token, doc, threshold))
        .collect();

    let doc_freq = matches.iter().filter(|m| !m.is_empty()).count();
    trace!(token = query_token, doc_freq, "query token matched");

    if doc_freq == 0 {
        return weights;
    }

    let idf = inverse_document_frequency(docs.len(), doc_freq);

    weights
        .into_iter()
        .zip(matches.iter().zip(docs))
        .map(|(weight, (positions, doc))| {
            if positions.is_empty() {
                return weight;
            }
            let tf = term_frequency(positions.len(), doc.len());
            positions
                .iter()
                .fold(weight, |acc, &sim| acc + (tf + idf) * sim)
        })
        .collect()
}

/// One weight per document, in corpus order.
///
/// A fold over the query tokens starting from all zeros. Empty query or empty
/// corpus gives all zeros (or nothing).
pub fn score_documents(query: &[String], docs: &[Vec<String>], threshold: f64) -> Vec<f64> {
    let weights = query
        .iter()
        .fold(vec![0.0; docs.len()], |weights, token| {
            accumulate_token(weights, token, docs, threshold)
        });

    check_weights_valid(&weights, docs.len());
    weights
}
