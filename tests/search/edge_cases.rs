//! Degenerate queries and corpora.

use fouille::{document_weights, rank, rank_indices, Ranker, TokenizedCorpus};

#[test]
fn test_empty_query_keeps_order() {
    let corpus = ["Vélo", "Voiture", "Maison"];
    assert_eq!(rank_indices("", &corpus), vec![0, 1, 2]);
    assert_eq!(document_weights("", &corpus), vec![0.0; 3]);
}

#[test]
fn test_stop_word_query_keeps_order() {
    assert_eq!(rank_indices("le la les", &["Le chat", "La souris"]), vec![0, 1]);
}

#[test]
fn test_punctuation_query_keeps_order() {
    assert_eq!(rank_indices("?!...", &["Le chat", "La souris"]), vec![0, 1]);
}

#[test]
fn test_no_match_keeps_order() {
    let corpus = ["Le chat", "La souris", "Le chien"];
    assert_eq!(rank_indices("xylophone", &corpus), vec![0, 1, 2]);
}

#[test]
fn test_empty_documents_sink() {
    let corpus = ["", "le la les", "Un chat"];
    assert_eq!(rank_indices("chat", &corpus), vec![2, 0, 1]);
    assert_eq!(document_weights("chat", &corpus)[..2], [0.0, 0.0]);
}

#[test]
fn test_all_documents_empty() {
    let corpus = ["", "   ", "!!!"];
    assert_eq!(rank_indices("chat", &corpus), vec![0, 1, 2]);
}

#[test]
fn test_empty_corpus() {
    let corpus: [&str; 0] = [];
    assert!(rank("chat", &corpus).is_empty());
    assert!(document_weights("chat", &corpus).is_empty());
    assert!(Ranker::default()
        .rank_scored_tokenized("chat", &TokenizedCorpus::new(&corpus))
        .is_empty());
}

#[test]
fn test_owned_strings() {
    let corpus: Vec<String> = vec!["Un chien".into(), "Un chat".into()];
    let ranked = rank("chat", &corpus);
    assert_eq!(ranked[0], "Un chat");
}

#[test]
fn test_large_corpus_is_permutation() {
    let corpus = super::common::synthetic_corpus(300, 12);
    let mut order = rank_indices("vélo électrique rouge", &corpus);
    assert_eq!(order.len(), 300);
    order.sort_unstable();
    assert!(order.iter().enumerate().all(|(i, &index)| i == index));
}

#[test]
fn test_batch_matches_single_queries() {
    let ranker = Ranker::default();
    let corpus = TokenizedCorpus::new(super::common::LISTING_TITLES);
    let queries = ["ordinateur", "velo pouces", "", "cafe"];

    let batch = ranker.rank_batch(&queries, &corpus);
    assert_eq!(batch.len(), queries.len());
    for (query, result) in queries.iter().zip(&batch) {
        assert_eq!(result, &ranker.rank_scored_tokenized(query, &corpus));
    }
}
