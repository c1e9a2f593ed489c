// Copyright 2025-present fouille contributors
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for ranking.
//!
//! Arbitrary queries against arbitrary small corpora: the result is always a
//! permutation, weights are finite, non-negative and descending, and
//! unmatched documents keep their corpus order.

#![no_main]

use arbitrary::Arbitrary;
use fouille::Ranker;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct RankInput {
    query: String,
    corpus: Vec<String>,
}

fuzz_target!(|input: RankInput| {
    // Cap sizes to avoid timeouts
    let query: String = input.query.chars().take(100).collect();
    let corpus: Vec<String> = input
        .corpus
        .into_iter()
        .take(16)
        .map(|doc| doc.chars().take(200).collect())
        .collect();

    let scored = Ranker::default().rank_scored(&query, &corpus);

    // INVARIANT 1: permutation of the corpus positions
    let mut seen = vec![false; corpus.len()];
    assert_eq!(scored.len(), corpus.len());
    for s in &scored {
        assert!(!seen[s.index], "index {} returned twice", s.index);
        seen[s.index] = true;
    }

    // INVARIANT 2: finite, non-negative
    for s in &scored {
        assert!(s.weight.is_finite() && s.weight >= 0.0, "bad weight {}", s.weight);
    }

    // INVARIANT 3: descending, ties in corpus order
    for pair in scored.windows(2) {
        assert!(pair[0].weight >= pair[1].weight);
        if pair[0].weight == pair[1].weight {
            assert!(pair[0].index < pair[1].index, "tie broken out of order");
        }
    }
});
