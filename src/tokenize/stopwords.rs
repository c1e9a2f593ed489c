// Copyright 2025-present fouille contributors
// SPDX-License-Identifier: Apache-2.0

//! French function words dropped before ranking.
//!
//! The list is already accent-folded ("ete", "etait", "ca") because lookups
//! happen after normalization. Elided forms ("l", "j", "qu") are here too:
//! the apostrophe becomes a space, so "l'arbre" leaves a lone "l" behind.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Articles, prepositions, pronouns, conjunctions and a few auxiliaries.
pub const STOP_WORDS: &[&str] = &[
    // articles
    "un", "une", "des", "le", "la", "les", "l", "du", "de",
    // conjunctions and interrogatives
    "a", "et", "ou", "mais", "donc", "car", "que", "qui", "quoi", "qu", "dont", "quand",
    "comment", "pourquoi",
    // prepositions
    "dans", "en", "sur", "sous", "chez", "par", "pour", "avec", "sans", "vers", "entre",
    // possessives
    "mon", "ton", "son", "notre", "votre", "leur", "mes", "tes", "ses", "ma",
    // demonstratives
    "ce", "cet", "cette", "ces", "ca", "cela", "ici",
    // subject pronouns and negation
    "il", "elle", "ils", "elles", "on", "y", "si", "ne", "pas", "plus", "moins",
    // avoir / etre
    "ai", "as", "avons", "avez", "ont", "ete", "etait", "avoir", "avais",
    // object and tonic pronouns
    "me", "te", "se", "nous", "vous", "lui", "moi", "toi", "soi", "je", "j", "tu",
];

static STOP_WORD_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// Is this (already normalized) word a stop word?
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET
        .get_or_init(|| STOP_WORDS.iter().copied().collect())
        .contains(word)
}
