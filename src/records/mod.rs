// Copyright 2025-present fouille contributors
// SPDX-License-Identifier: Apache-2.0

//! Searching structured records (marketplace listings and the like).
//!
//! Each record is flattened to one string, the strings are ranked by
//! position, and the positions index straight back into the record slice.
//! Two listings that flatten to the same text are still two results.
//!
//! ```text
//! {"_id": 7, "title": "Vélo", "price": 120, "image": "…"}
//!   └─▶ "Vélo | 120"
//! ```
//!
//! Search results can then be re-sorted by price, seller rating or date with
//! [`sort_records`].

mod sort;

pub use sort::{sort_records, RecordSort};

use serde_json::{Number, Value};

use crate::config::FlattenConfig;
use crate::search::Ranker;

/// Text of one JSON value, as it reads in a listing.
///
/// Strings are verbatim, numbers as a listing shows them, `null` and
/// booleans as their JSON text. Arrays join their elements with `,` and
/// nested objects join their values with a space.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        Value::Array(items) => items.iter().map(value_text).collect::<Vec<_>>().join(","),
        Value::Object(fields) => fields.values().map(value_text).collect::<Vec<_>>().join(" "),
        // Null, Bool
        scalar => scalar.to_string(),
    }
}

/// Whole floats print without a fractional part: a price stored as `120.0`
/// reads (and tokenizes) as `120`, not `1200`.
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            (f as i64).to_string()
        }
        _ => n.to_string(),
    }
}

/// One searchable string for a record.
///
/// For objects: the values of every non-excluded top-level field, in key
/// order. The separator goes in front of a value only once the text so far is
/// non-empty, so leading empty fields leave no dangling separator. Anything
/// else is flattened as a single value.
pub fn flatten_record(record: &Value, config: &FlattenConfig) -> String {
    match record {
        Value::Object(fields) => fields
            .iter()
            .filter(|(key, _)| !config.is_excluded(key))
            .fold(String::new(), |mut text, (_, value)| {
                if !text.is_empty() {
                    text.push_str(&config.separator);
                }
                text.push_str(&value_text(value));
                text
            }),
        other => value_text(other),
    }
}

/// Records reordered by relevance of their flattened text to `query`.
pub fn search_records<'a>(
    ranker: &Ranker,
    query: &str,
    records: &'a [Value],
    config: &FlattenConfig,
) -> Vec<&'a Value> {
    let texts: Vec<String> = records
        .iter()
        .map(|record| flatten_record(record, config))
        .collect();

    ranker
        .rank_indices(query, &texts)
        .into_iter()
        .map(|index| &records[index])
        .collect()
}
