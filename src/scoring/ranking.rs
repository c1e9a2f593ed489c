// Copyright 2025-present fouille contributors
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how weights become an order.
//!
//! Sort order:
//! 1. **Weight** - descending, higher is more relevant
//! 2. **Corpus position** - ascending, via a stable sort
//!
//! Stability is what makes the degenerate cases come out right: an empty
//! query, or a query nothing matches, leaves every weight at zero and the
//! corpus comes back in its original order.

use std::cmp::Ordering;

use crate::contracts::check_permutation;
use crate::types::ScoredDocument;

/// Compare two weights for ranking: `Less` means `a` ranks first.
///
/// Weights are finite (checked by contract), so the `partial_cmp` fallback
/// never fires in practice.
pub fn compare_weights(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Pair each weight with its corpus position and sort, most relevant first.
pub fn order_by_weight(weights: &[f64]) -> Vec<ScoredDocument> {
    let mut scored: Vec<ScoredDocument> = weights
        .iter()
        .enumerate()
        .map(|(index, &weight)| ScoredDocument { index, weight })
        .collect();

    // sort_by is stable: equal weights keep corpus order
    scored.sort_by(|a, b| compare_weights(a.weight, b.weight));

    if cfg!(debug_assertions) {
        let order: Vec<usize> = scored.iter().map(|s| s.index).collect();
        check_permutation(&order, weights.len());
    }
    scored
}
