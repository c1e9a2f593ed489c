//! Shared test utilities and fixtures.

#![allow(dead_code)]

// Re-export canonical fixtures from fouille::testing
pub use fouille::testing::{listing_records, synthetic_corpus, LISTING_TITLES};

/// Rank and return owned strings, for easy comparison against literals.
pub fn ranked(query: &str, corpus: &[&str]) -> Vec<String> {
    fouille::rank(query, corpus)
        .into_iter()
        .map(|doc| doc.to_string())
        .collect()
}

/// Assert the top result, with the full order in the failure message.
pub fn assert_first(query: &str, corpus: &[&str], expected: &str) {
    let order = ranked(query, corpus);
    assert_eq!(
        order.first().map(String::as_str),
        Some(expected),
        "query {:?} ranked {:?}",
        query,
        order
    );
}

/// Assert the complete order.
pub fn assert_order(query: &str, corpus: &[&str], expected: &[&str]) {
    let order = ranked(query, corpus);
    assert_eq!(order, expected, "query {:?}", query);
}
