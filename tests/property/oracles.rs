//! Reference oracles for differential testing.
//!
//! Slow, obviously-correct versions of the distance and the weighting. The
//! optimized code must agree with them on every input.

use fouille::normalize;

/// Full-matrix Wagner-Fischer over chars.
pub fn oracle_levenshtein(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];

    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        dp[0][j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }
    dp[a.len()][b.len()]
}

/// Similarity straight from the definition, using the oracle distance.
pub fn oracle_similarity(a: &str, b: &str) -> f64 {
    let (la, lb) = (a.chars().count(), b.chars().count());
    if la == 0 || lb == 0 {
        return 0.0;
    }
    1.0 - oracle_levenshtein(a, b) as f64 / la.max(lb) as f64
}

/// Weights from the textbook formula: nested loops, no early exits.
pub fn oracle_weights(query: &str, corpus: &[String]) -> Vec<f64> {
    let query_tokens = normalize(query);
    let docs: Vec<Vec<String>> = corpus.iter().map(|doc| normalize(doc)).collect();
    let n = docs.len() as f64;
    let mut weights = vec![0.0; docs.len()];

    for q in &query_tokens {
        let matches = |t: &String| oracle_similarity(q, t) > 0.8;
        let df = docs.iter().filter(|doc| doc.iter().any(matches)).count();
        if df == 0 {
            continue;
        }
        let idf = (n / df as f64).log10();

        for (doc, weight) in docs.iter().zip(weights.iter_mut()) {
            let occurrences = doc.iter().filter(|t| matches(t)).count();
            for t in doc {
                let sim = oracle_similarity(q, t);
                if sim > 0.8 {
                    let tf = (1.0 + occurrences as f64 / doc.len() as f64).log10();
                    *weight += (tf + idf) * sim;
                }
            }
        }
    }
    weights
}

/// Stable sort of positions by descending weight.
pub fn oracle_order(weights: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.sort_by(|&a, &b| weights[b].partial_cmp(&weights[a]).unwrap());
    order
}
