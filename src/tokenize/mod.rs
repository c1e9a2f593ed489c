// Copyright 2025-present fouille contributors
// SPDX-License-Identifier: Apache-2.0

//! Text normalization: raw French text in, comparable tokens out.
//!
//! Queries and documents go through the exact same pipeline, so "Élève" in a
//! listing and "eleve" typed in the search bar end up as the same token.
//!
//! # Pipeline
//!
//! ```text
//! "L'Élève-modèle a 12 ans !"
//!   │ lowercase            "l'élève-modèle a 12 ans !"
//!   │ fold accents         "l'eleve-modele a 12 ans !"
//!   │ separators → space   "l eleve modele a 12 ans !"
//!   │ keep [a-z0-9 ]       "l eleve modele a 12 ans "
//!   │ split                [l, eleve, modele, a, 12, ans]
//!   ▼ drop stop words      [eleve, modele, 12, ans]
//! ```
//!
//! Characters outside `[a-z0-9 ]` are deleted rather than replaced, so
//! "porte@clé" becomes the single token "portecle". Only tabs, newlines,
//! carriage returns, hyphens and apostrophes split words.

mod stopwords;

pub use stopwords::{is_stop_word, STOP_WORDS};

use crate::contracts::check_tokens_normalized;

/// Replace a French accented letter by its base letter.
///
/// Only the accents French actually uses are folded. Anything else
/// (`ñ`, `ø`, `ō`...) passes through unchanged and is dropped later by the
/// `[a-z0-9 ]` filter.
pub fn fold_accent(c: char) -> char {
    match c {
        'à' | 'â' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'î' | 'ï' => 'i',
        'ô' | 'ö' => 'o',
        'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        other => other,
    }
}

/// Characters that separate words.
#[inline]
fn is_separator(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '-' | '\'')
}

/// Lowercase, fold accents, and strip everything but `[a-z0-9 ]`.
///
/// This is the normalized text before splitting; stop words are still in it.
pub fn clean(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(fold_accent)
        .map(|c| if is_separator(c) { ' ' } else { c })
        .filter(|&c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' ')
        .collect()
}

/// Turn free text into the ordered list of tokens used for ranking.
///
/// Deterministic and side-effect free. Returns an empty list for empty input
/// or input made only of stop words and punctuation.
///
/// ```
/// use fouille::normalize;
///
/// assert_eq!(normalize("Le chat mange une souris"), vec!["chat", "mange", "souris"]);
/// assert_eq!(normalize("Étoile"), normalize("etoile"));
/// assert!(normalize("le la les !?").is_empty());
/// ```
pub fn normalize(text: &str) -> Vec<String> {
    let tokens: Vec<String> = clean(text)
        .split(' ')
        .filter(|word| !word.is_empty() && !is_stop_word(word))
        .map(str::to_owned)
        .collect();

    check_tokens_normalized(&tokens);
    tokens
}
