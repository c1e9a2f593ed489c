//! Ranker properties, checked against the oracle weighting.

use super::oracles::{oracle_order, oracle_weights};
use super::{corpus_strategy, document_strategy};
use fouille::{document_weights, rank, rank_indices, Ranker, TokenizedCorpus};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_weights_match_oracle(query in document_strategy(), corpus in corpus_strategy()) {
        let weights = document_weights(&query, &corpus);
        let expected = oracle_weights(&query, &corpus);
        prop_assert_eq!(weights.len(), expected.len());
        for (w, e) in weights.iter().zip(&expected) {
            prop_assert!((w - e).abs() < 1e-9, "weight {} vs oracle {}", w, e);
        }
    }

    #[test]
    fn prop_order_matches_oracle(query in document_strategy(), corpus in corpus_strategy()) {
        let weights = document_weights(&query, &corpus);
        prop_assert_eq!(rank_indices(&query, &corpus), oracle_order(&weights));
    }

    #[test]
    fn prop_rank_is_permutation(query in document_strategy(), corpus in corpus_strategy()) {
        let mut order = rank_indices(&query, &corpus);
        order.sort_unstable();
        prop_assert_eq!(order, (0..corpus.len()).collect::<Vec<_>>());
    }

    #[test]
    fn prop_rank_projects_indices(query in document_strategy(), corpus in corpus_strategy()) {
        let ranked = rank(&query, &corpus);
        for (doc, index) in ranked.into_iter().zip(rank_indices(&query, &corpus)) {
            prop_assert!(std::ptr::eq(doc, &corpus[index]));
        }
    }

    #[test]
    fn prop_weights_descend(query in document_strategy(), corpus in corpus_strategy()) {
        let scored = Ranker::default().rank_scored(&query, &corpus);
        prop_assert!(scored.windows(2).all(|w| w[0].weight >= w[1].weight));
    }

    #[test]
    fn prop_unmatched_keep_order(query in document_strategy(), corpus in corpus_strategy()) {
        let scored = Ranker::default().rank_scored(&query, &corpus);
        let unmatched: Vec<usize> = scored.iter().filter(|s| !s.is_match()).map(|s| s.index).collect();
        prop_assert!(unmatched.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_ranking_deterministic(query in document_strategy(), corpus in corpus_strategy()) {
        prop_assert_eq!(document_weights(&query, &corpus), document_weights(&query, &corpus));
    }

    #[test]
    fn prop_query_stop_words_neutral(query in document_strategy(), corpus in corpus_strategy()) {
        let padded = format!("le {} et la", query);
        prop_assert_eq!(document_weights(&padded, &corpus), document_weights(&query, &corpus));
    }

    #[test]
    fn prop_tokenized_corpus_equivalent(query in document_strategy(), corpus in corpus_strategy()) {
        let ranker = Ranker::default();
        let tokenized = TokenizedCorpus::new(&corpus);
        prop_assert_eq!(
            ranker.rank_scored_tokenized(&query, &tokenized),
            ranker.rank_scored(&query, &corpus)
        );
    }
}
