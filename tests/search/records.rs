//! Searching JSON records.

use fouille::{flatten_record, search_records, sort_records, FlattenConfig, Ranker, RecordSort};
use serde_json::json;

use super::common::listing_records;

#[test]
fn test_search_listing_records() {
    let records = listing_records();
    let ranked = search_records(
        &Ranker::default(),
        "velo enfant",
        &records,
        &FlattenConfig::default(),
    );

    assert_eq!(ranked.len(), records.len());
    assert_eq!(ranked[0]["title"], "Vélo enfant 16 pouces");
    assert_eq!(ranked[1]["title"], "Vélo de course rouge, très bon état");
}

#[test]
fn test_excluded_fields_are_not_searched() {
    let records = vec![
        json!({"_id": "chat", "title": "Table basse", "image": "chat.png"}),
        json!({"_id": "2", "title": "Un chat en peluche"}),
    ];
    let ranked = search_records(&Ranker::default(), "chat", &records, &FlattenConfig::default());
    assert_eq!(ranked[0]["_id"], "2");
}

#[test]
fn test_identical_records_are_both_returned() {
    let records = vec![
        json!({"title": "Vélo rouge", "price": 50}),
        json!({"title": "Vélo rouge", "price": 50}),
        json!({"title": "Canapé", "price": 300}),
    ];
    let ranked = search_records(&Ranker::default(), "velo", &records, &FlattenConfig::default());

    assert_eq!(ranked.len(), 3);
    assert!(std::ptr::eq(ranked[0], &records[0]));
    assert!(std::ptr::eq(ranked[1], &records[1]));
    assert_eq!(ranked[2]["title"], "Canapé");
}

#[test]
fn test_flattened_listing_text() {
    let record = &listing_records()[1];
    assert_eq!(
        flatten_record(record, &FlattenConfig::default()),
        "Ordinateur portable Dell 15 pouces | 40 | Divers"
    );
}

#[test]
fn test_custom_exclusions() {
    let config = FlattenConfig {
        excluded_fields: vec!["category".to_string()],
        separator: " / ".to_string(),
    };
    let record = json!({"title": "Vélo", "category": "Sport", "price": 120});
    assert_eq!(flatten_record(&record, &config), "Vélo / 120");
}

#[test]
fn test_whole_float_price_is_searchable() {
    let records = vec![
        json!({"title": "Table", "price": 80.0}),
        json!({"title": "Chaise", "price": 120.0}),
    ];
    let ranked = search_records(&Ranker::default(), "120", &records, &FlattenConfig::default());
    assert_eq!(ranked[0]["title"], "Chaise");
    assert_eq!(
        flatten_record(&json!({"title": "", "price": 120.0}), &FlattenConfig::default()),
        "120"
    );
}

#[test]
fn test_sort_search_results_by_price() {
    let records = vec![
        json!({"title": "Vélo de ville", "price": 150}),
        json!({"title": "Canapé", "price": 20}),
        json!({"title": "Vélo enfant", "price": 60.0}),
        json!({"title": "Vélo", "price": 90}),
    ];
    let ranked = search_records(&Ranker::default(), "velo", &records, &FlattenConfig::default());
    let titles = |sorted: Vec<&serde_json::Value>| -> Vec<String> {
        sorted.iter().map(|r| r["title"].as_str().unwrap().to_string()).collect()
    };

    assert_eq!(
        titles(sort_records(&ranked, RecordSort::PriceAsc)),
        ["Canapé", "Vélo enfant", "Vélo", "Vélo de ville"]
    );
    assert_eq!(
        titles(sort_records(&ranked, RecordSort::PriceDesc)),
        ["Vélo de ville", "Vélo", "Vélo enfant", "Canapé"]
    );
    assert_eq!(titles(sort_records(&ranked, RecordSort::Relevance)), titles(ranked.clone()));
}

#[test]
fn test_sort_by_rating_and_date() {
    let records = vec![
        json!({"title": "ancien", "date": "2023-01-10", "rating": 3}),
        json!({"title": "recent", "date": "2024-05-02T09:00:00Z"}),
        json!({"title": "moyen", "date": "2023-09-30", "rating": 5}),
    ];
    let refs: Vec<&serde_json::Value> = records.iter().collect();
    let titles = |sorted: Vec<&serde_json::Value>| -> Vec<String> {
        sorted.iter().map(|r| r["title"].as_str().unwrap().to_string()).collect()
    };

    assert_eq!(titles(sort_records(&refs, RecordSort::Rating)), ["moyen", "ancien", "recent"]);
    assert_eq!(titles(sort_records(&refs, RecordSort::DateAsc)), ["ancien", "moyen", "recent"]);
    assert_eq!(titles(sort_records(&refs, RecordSort::DateDesc)), ["recent", "moyen", "ancien"]);
    assert_eq!(
        titles(sort_records(&refs, RecordSort::from_key("inconnu"))),
        ["ancien", "recent", "moyen"]
    );
}
