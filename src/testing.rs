// Copyright 2025-present fouille contributors
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplicating corpora across tests.

#![doc(hidden)]

use serde_json::{json, Value};

/// Small marketplace-like corpus: titles a user might list.
pub const LISTING_TITLES: &[&str] = &[
    "Vélo de course rouge, très bon état",
    "Ordinateur portable Dell 15 pouces",
    "Table en chêne massif avec quatre chaises",
    "Canapé d'angle gris",
    "Ordinateur de bureau HP avec écran",
    "Vélo enfant 16 pouces",
    "Machine à café expresso",
    "Lot de livres de cuisine française",
];

/// The same listings as JSON records, with fields search should ignore.
pub fn listing_records() -> Vec<Value> {
    LISTING_TITLES
        .iter()
        .enumerate()
        .map(|(id, title)| {
            json!({
                "_id": format!("listing-{}", id),
                "title": title,
                "price": 20 * (id + 1),
                "category": "Divers",
                "image": "data:image/png;base64,AAAA",
                "buyers": [],
            })
        })
        .collect()
}

/// Corpus of `docs` documents, each `words_per_doc` words cycled from a
/// French vocabulary. Deterministic, for benchmarks and large-input tests.
pub fn synthetic_corpus(docs: usize, words_per_doc: usize) -> Vec<String> {
    const VOCABULARY: &[&str] = &[
        "vélo", "voiture", "maison", "appartement", "ordinateur", "téléphone", "table",
        "chaise", "canapé", "livre", "rouge", "bleu", "neuf", "occasion", "état", "prix",
        "grand", "petit", "jardin", "cuisine", "électrique", "essence", "garçon", "fille",
    ];

    (0..docs)
        .map(|d| {
            (0..words_per_doc)
                .map(|w| VOCABULARY[(d * 7 + w * 13 + d * w) % VOCABULARY.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
