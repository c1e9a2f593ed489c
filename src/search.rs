// Copyright 2025-present fouille contributors
// SPDX-License-Identifier: Apache-2.0

//! Ranking entry points.
//!
//! The ranker works on corpus *positions*. `rank_indices` is the primitive;
//! `rank` projects the order back onto the caller's slice, so duplicate
//! documents stay distinct and nothing is ever re-found by string equality.
//!
//! The ranker never mutates its inputs and holds no state beyond its config,
//! so one instance can be shared freely across threads.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::config::RankerConfig;
use crate::error::Result;
use crate::scoring::ranking::order_by_weight;
use crate::scoring::score_documents;
use crate::tokenize::normalize;
use crate::types::{ScoredDocument, TokenizedCorpus};

/// Fuzzy TF-IDF document ranker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranker {
    config: RankerConfig,
}

impl Ranker {
    /// Build a ranker from a validated config.
    pub fn new(config: RankerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Weight of every document against `query`, in corpus order.
    pub fn weights<T: AsRef<str>>(&self, query: &str, corpus: &[T]) -> Vec<f64> {
        self.weights_tokenized(query, &TokenizedCorpus::new(corpus))
    }

    /// Same as [`Ranker::weights`] over a pre-tokenized corpus.
    pub fn weights_tokenized(&self, query: &str, corpus: &TokenizedCorpus) -> Vec<f64> {
        let query_tokens = normalize(query);
        debug!(
            query_tokens = query_tokens.len(),
            documents = corpus.len(),
            "scoring corpus"
        );
        score_documents(&query_tokens, corpus.docs(), self.config.fuzzy_threshold)
    }

    /// Every document with its weight, most relevant first.
    ///
    /// Documents with equal weight keep their corpus order.
    pub fn rank_scored<T: AsRef<str>>(&self, query: &str, corpus: &[T]) -> Vec<ScoredDocument> {
        self.rank_scored_tokenized(query, &TokenizedCorpus::new(corpus))
    }

    /// Same as [`Ranker::rank_scored`] over a pre-tokenized corpus.
    pub fn rank_scored_tokenized(&self, query: &str, corpus: &TokenizedCorpus) -> Vec<ScoredDocument> {
        if corpus.is_empty() {
            return Vec::new();
        }

        let ranked = order_by_weight(&self.weights_tokenized(query, corpus));
        debug!(
            matched = ranked.iter().filter(|s| s.is_match()).count(),
            "ranked corpus"
        );
        ranked
    }

    /// Rank one corpus against many queries, one result list per query.
    ///
    /// With the `parallel` feature the queries are spread over the rayon pool;
    /// each individual ranking stays single-threaded.
    pub fn rank_batch<Q: AsRef<str> + Sync>(
        &self,
        queries: &[Q],
        corpus: &TokenizedCorpus,
    ) -> Vec<Vec<ScoredDocument>> {
        debug!(queries = queries.len(), documents = corpus.len(), "batch ranking");

        #[cfg(feature = "parallel")]
        {
            queries
                .par_iter()
                .map(|query| self.rank_scored_tokenized(query.as_ref(), corpus))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            queries
                .iter()
                .map(|query| self.rank_scored_tokenized(query.as_ref(), corpus))
                .collect()
        }
    }

    /// Corpus positions, most relevant first. Always a permutation of
    /// `0..corpus.len()`.
    pub fn rank_indices<T: AsRef<str>>(&self, query: &str, corpus: &[T]) -> Vec<usize> {
        self.rank_scored(query, corpus)
            .into_iter()
            .map(|scored| scored.index)
            .collect()
    }

    /// The corpus reordered by relevance to `query`.
    ///
    /// Same length and same elements as `corpus`; nothing is filtered out.
    pub fn rank<'a, T: AsRef<str>>(&self, query: &str, corpus: &'a [T]) -> Vec<&'a T> {
        self.rank_indices(query, corpus)
            .into_iter()
            .map(|index| &corpus[index])
            .collect()
    }
}

/// Rank `corpus` against `query` with the default threshold.
///
/// ```
/// let corpus = ["Le chat", "Chat souris", "La souris"];
/// let ranked = fouille::rank("le chat mange une souris", &corpus);
/// assert_eq!(*ranked[0], "Chat souris");
/// ```
pub fn rank<'a, T: AsRef<str>>(query: &str, corpus: &'a [T]) -> Vec<&'a T> {
    Ranker::default().rank(query, corpus)
}

/// Corpus positions ordered by relevance, with the default threshold.
pub fn rank_indices<T: AsRef<str>>(query: &str, corpus: &[T]) -> Vec<usize> {
    Ranker::default().rank_indices(query, corpus)
}

/// Per-document weights in corpus order, with the default threshold.
pub fn document_weights<T: AsRef<str>>(query: &str, corpus: &[T]) -> Vec<f64> {
    Ranker::default().weights(query, corpus)
}
