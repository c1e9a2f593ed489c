// Copyright 2025-present fouille contributors
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance and the match predicate.
//!
//! The distance must be a metric bounded by the string lengths, and the
//! length shortcut in `match_score` must never disagree with the full
//! similarity.

#![no_main]

use arbitrary::Arbitrary;
use fouille::{edit_distance, match_score, similarity};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    a: String,
    b: String,
    /// Mapped into [0, 1)
    threshold: u16,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let a: String = input.a.chars().take(64).collect();
    let b: String = input.b.chars().take(64).collect();
    let threshold = f64::from(input.threshold) / (f64::from(u16::MAX) + 1.0);

    let (la, lb) = (a.chars().count(), b.chars().count());
    let d = edit_distance(&a, &b);

    // INVARIANT 1: symmetric
    assert_eq!(d, edit_distance(&b, &a), "asymmetric for {:?} / {:?}", a, b);

    // INVARIANT 2: |la - lb| <= d <= max(la, lb)
    assert!(d >= la.abs_diff(lb), "distance {} below length gap", d);
    assert!(d <= la.max(lb), "distance {} above longest length", d);

    // INVARIANT 3: zero only for equal strings
    assert_eq!(d == 0, a == b);

    // INVARIANT 4: similarity in [0, 1]
    let s = similarity(&a, &b);
    assert!((0.0..=1.0).contains(&s), "similarity {} out of range", s);

    // INVARIANT 5: the shortcut agrees with the full computation
    let expected = (s > threshold).then_some(s);
    assert_eq!(match_score(&a, &b, threshold), expected, "{:?} / {:?} at {}", a, b, threshold);
});
