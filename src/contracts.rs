// Copyright 2025-present fouille contributors
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the ranking pipeline.
//!
//! Debug-mode assertions for the properties the rest of the crate relies on:
//!
//! 1. **Zero-cost in release builds** (everything is `debug_assert!`)
//! 2. **Early failure** in tests and during development
//!
//! | Contract                      | Property                                    |
//! |-------------------------------|---------------------------------------------|
//! | `check_similarity_bounds`     | similarity lies in `[0, 1]`                 |
//! | `check_tokens_normalized`     | tokens are non-empty `[a-z0-9]+`, no stop word |
//! | `check_weights_valid`         | one finite, non-negative weight per document |
//! | `check_permutation`           | ranking output is a permutation of `0..n`   |
//!
//! # Usage
//!
//! ```ignore
//! use fouille::contracts::*;
//!
//! // In debug builds, this panics if the order drops or repeats a document
//! check_permutation(&order, corpus.len());
//! ```

use crate::fuzzy::FUZZY_MATCH_THRESHOLD;
use crate::tokenize::is_stop_word;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The match threshold must leave room for at least exact matches.
const _: () = {
    assert!(FUZZY_MATCH_THRESHOLD >= 0.0);
    assert!(FUZZY_MATCH_THRESHOLD < 1.0);
};

// ============================================================================
// FUZZY MATCHER CONTRACTS
// ============================================================================

/// Check that a similarity score is a valid fraction.
///
/// # Panics (debug builds only)
/// Panics if `score` is NaN or outside `[0, 1]`.
#[inline]
pub fn check_similarity_bounds(score: f64) {
    debug_assert!(
        (0.0..=1.0).contains(&score),
        "Contract violation: similarity {} outside [0, 1]",
        score
    );
}

// ============================================================================
// TOKENIZER CONTRACTS
// ============================================================================

/// Check that every token is what the normalizer promises.
///
/// # Panics (debug builds only)
/// Panics on an empty token, a character outside `[a-z0-9]`, or a stop word.
#[inline]
pub fn check_tokens_normalized(tokens: &[String]) {
    if !cfg!(debug_assertions) {
        return;
    }

    for (i, token) in tokens.iter().enumerate() {
        debug_assert!(
            !token.is_empty(),
            "Contract violation: tokens[{}] is empty",
            i
        );
        debug_assert!(
            token
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()),
            "Contract violation: tokens[{}] = '{}' has characters outside [a-z0-9]",
            i,
            token
        );
        debug_assert!(
            !is_stop_word(token),
            "Contract violation: tokens[{}] = '{}' is a stop word",
            i,
            token
        );
    }
}

// ============================================================================
// SCORER CONTRACTS
// ============================================================================

/// Check that the weight vector lines up with the corpus.
///
/// # Panics (debug builds only)
/// Panics on a length mismatch or a negative / non-finite weight.
#[inline]
pub fn check_weights_valid(weights: &[f64], corpus_len: usize) {
    debug_assert_eq!(
        weights.len(),
        corpus_len,
        "Contract violation: {} weights for {} documents",
        weights.len(),
        corpus_len
    );

    for (i, &weight) in weights.iter().enumerate() {
        debug_assert!(
            weight.is_finite() && weight >= 0.0,
            "Contract violation: weights[{}] = {} is not a finite non-negative number",
            i,
            weight
        );
    }
}

/// Check that a ranking is a permutation of `0..len`.
///
/// # Panics (debug builds only)
/// Panics if an index is out of range, repeated, or missing.
#[inline]
pub fn check_permutation(order: &[usize], len: usize) {
    if !cfg!(debug_assertions) {
        return;
    }

    debug_assert_eq!(
        order.len(),
        len,
        "Contract violation: ranking has {} entries for {} documents",
        order.len(),
        len
    );

    let mut seen = vec![false; len];
    for (rank, &index) in order.iter().enumerate() {
        debug_assert!(
            index < len,
            "Contract violation: ranking[{}] = {} out of range (len {})",
            rank,
            index,
            len
        );
        if index < len {
            debug_assert!(
                !seen[index],
                "Contract violation: document {} ranked twice",
                index
            );
            seen[index] = true;
        }
    }
}
