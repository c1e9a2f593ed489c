// Copyright 2025-present fouille contributors
// SPDX-License-Identifier: Apache-2.0

//! Edit distance, similarity, and the match predicate built on top of them.
//!
//! The key insight for the hot path: `|len(a) - len(b)|` is a lower bound on
//! edit distance, so `1 - diff / max_len` is an upper bound on similarity.
//! When that bound is already at or below the threshold, the pair cannot
//! match and the O(nm) DP is skipped. Most cross-word comparisons in a
//! document end there.

use crate::contracts::check_similarity_bounds;

/// Similarity a token pair must strictly exceed to count as a match.
///
/// A pair at exactly 0.8 (one edit in five characters) does not match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.8;

/// Levenshtein distance over Unicode scalar values.
///
/// Unit cost for insertion, deletion and substitution. Runs in O(|a|·|b|)
/// time and keeps a single row sized to the shorter string.
pub fn edit_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Row runs over the shorter string
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, &lc) in long.iter().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;

        for (j, &sc) in short.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(lc != sc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diag + cost);
            diag = above;
        }
    }

    row[short.len()]
}

/// Normalized similarity in `[0, 1]`: `1 - distance / max(len(a), len(b))`.
///
/// Returns 0 when either string is empty, 1 only for identical strings.
/// Lengths are in characters, not bytes.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let max_len = a.chars().count().max(b.chars().count());
    let score = 1.0 - edit_distance(a, b) as f64 / max_len as f64;
    check_similarity_bounds(score);
    score
}

/// Similarity of a pair, if it is strictly above `threshold`.
///
/// Same answer as `Some(similarity(a, b)).filter(|&s| s > threshold)`, but
/// rejects pairs whose length difference alone rules them out before
/// touching the DP.
pub fn match_score(a: &str, b: &str, threshold: f64) -> Option<f64> {
    if a.is_empty() || b.is_empty() {
        return None;
    }

    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let max_len = a_len.max(b_len) as f64;

    // Early-exit: similarity can't beat this bound
    let diff = a_len.abs_diff(b_len) as f64;
    if 1.0 - diff / max_len <= threshold {
        return None;
    }

    let score = 1.0 - edit_distance(a, b) as f64 / max_len;
    check_similarity_bounds(score);
    (score > threshold).then_some(score)
}

/// Do these two tokens refer to the same word under `threshold`?
pub fn is_fuzzy_match(a: &str, b: &str, threshold: f64) -> bool {
    match_score(a, b, threshold).is_some()
}
