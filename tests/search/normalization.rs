//! Accents, case, separators and punctuation don't change what matches.

use super::common::{assert_first, ranked};
use fouille::normalize;

#[test]
fn test_accents_are_equivalent() {
    let order = ranked("élève", &["Un élève studieux", "Un eleve normal", "Un professeur"]);
    assert!(order[0].contains("élève") || order[0].contains("eleve"));
    assert_eq!(order[2], "Un professeur");
}

#[test]
fn test_case_is_ignored() {
    let order = ranked("ORDINATEUR", &["Mon ordinateur", "Une voiture", "UN ORDINATEUR PUISSANT"]);
    assert!(order[0].to_lowercase().contains("ordinateur"));
    assert_eq!(order[2], "Une voiture");
}

#[test]
fn test_french_accent_variety() {
    let order = ranked("être là où ça coûte cher", &["Être là", "ou ca coute", "Documentation"]);
    assert_eq!(order, vec!["Être là", "ou ca coute", "Documentation"]);
}

#[test]
fn test_hyphens_split_words() {
    let order = ranked("arc-en-ciel", &["Un arc en ciel", "Une voiture", "Un arc-en-ciel"]);
    assert!(order[0].contains("arc"));
    assert_eq!(order[2], "Une voiture");
}

#[test]
fn test_apostrophes_split_words() {
    assert_first(
        "aujourd'hui",
        &["Aujourd hui", "Demain il fera beau", "Aujourd'hui il pleut"],
        "Aujourd hui",
    );
}

#[test]
fn test_punctuation_is_ignored() {
    let order = ranked("test@#$%", &["Un test important", "Documentation", "Test!!! Super!!!"]);
    assert!(order[0].to_lowercase().contains("test"));
    assert_eq!(order[2], "Documentation");
}

#[test]
fn test_tabs_and_newlines() {
    let order = ranked("test document", &["test\tdocument", "test\ndocument", "autre chose"]);
    assert!(order[0].contains("test"));
    assert_eq!(order[2], "autre chose");
}

#[test]
fn test_etoile_folds() {
    assert_eq!(normalize("Étoile"), normalize("etoile"));
    assert_eq!(normalize("Étoile"), vec!["etoile"]);
}

#[test]
fn test_stop_word_neutrality() {
    assert_eq!(normalize("le chat"), vec!["chat"]);
    assert_eq!(normalize("le chat"), normalize("chat"));
}
