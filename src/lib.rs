// Copyright 2025-present fouille contributors
// SPDX-License-Identifier: Apache-2.0

//! Typo-tolerant TF-IDF ranking for short French documents.
//!
//! Give it a free-text query and a list of documents (listing titles,
//! descriptions, flattened records); get the same documents back, most
//! relevant first. Misspellings, plurals, accents and case don't get in the
//! way: "ordinater" finds "Ordinateur portable", "pomme" finds "pommes".
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌────────────────┐     ┌───────────────────┐
//! │  tokenize/   │────▶│    fuzzy/      │────▶│     scoring/      │
//! │ (normalize,  │     │ (edit_distance,│     │ (score_documents, │
//! │  stop words) │     │  similarity)   │     │  order_by_weight) │
//! └──────────────┘     └────────────────┘     └───────────────────┘
//!        │                                              │
//!        ▼                                              ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │         search.rs (Ranker, rank, rank_indices)                │
//! │         records/ (search_records, sort_records)               │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! Data flows one way: query and corpus are normalized the same way, every
//! query token is compared against every document token, matches add to the
//! document's weight, and a stable sort on weight gives the order.
//!
//! # Usage
//!
//! ```
//! let corpus = [
//!     "J'aime les pommes",
//!     "J'aime les pommes et les poires",
//!     "J'aime les bananes",
//! ];
//!
//! let ranked = fouille::rank("pomme poire", &corpus);
//! assert_eq!(*ranked[0], "J'aime les pommes et les poires");
//!
//! // Positions instead of references, for mapping back to your own records
//! assert_eq!(fouille::rank_indices("pomme poire", &corpus), vec![1, 0, 2]);
//! ```
//!
//! Ranking is a pure function: no I/O, no shared state, inputs are only
//! borrowed. Cost grows with query tokens × documents × document length ×
//! token length², so pre-filter large corpora (by category, price...) before
//! ranking them.

// Module declarations
mod config;
pub mod contracts;
mod error;
mod fuzzy;
pub mod input;
mod records;
pub mod scoring;
mod search;
pub mod testing;
mod tokenize;
mod types;

// Re-exports for public API
pub use config::{AppConfig, FlattenConfig, RankerConfig};
pub use error::{Error, Result};
pub use fuzzy::{edit_distance, is_fuzzy_match, match_score, similarity, FUZZY_MATCH_THRESHOLD};
pub use records::{flatten_record, search_records, sort_records, RecordSort};
pub use scoring::{inverse_document_frequency, score_documents, term_frequency};
pub use search::{document_weights, rank, rank_indices, Ranker};
pub use tokenize::{clean, fold_accent, is_stop_word, normalize, STOP_WORDS};
pub use types::{ScoredDocument, TokenizedCorpus};
