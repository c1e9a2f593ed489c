// Copyright 2025-present fouille contributors
// SPDX-License-Identifier: Apache-2.0

//! Re-sorting search results by a listing field.
//!
//! | Key          | Order                                   | Missing / unreadable field |
//! |--------------|-----------------------------------------|----------------------------|
//! | `price-asc`  | cheapest first                          | last                       |
//! | `price-desc` | most expensive first                    | last                       |
//! | `rating`     | best rated first                        | counts as 0                |
//! | `date-asc`   | oldest first                            | last                       |
//! | `date-desc`  | newest first                            | last                       |
//!
//! Sorts are stable, so records with equal keys keep their relevance order.
//! Any other key leaves the order untouched.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;
use tracing::warn;

/// How to order records after ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordSort {
    /// Keep the relevance order.
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    Rating,
    DateAsc,
    DateDesc,
}

impl RecordSort {
    pub const KEYS: &'static [&'static str] =
        &["relevance", "price-asc", "price-desc", "rating", "date-asc", "date-desc"];

    pub fn as_str(self) -> &'static str {
        match self {
            RecordSort::Relevance => "relevance",
            RecordSort::PriceAsc => "price-asc",
            RecordSort::PriceDesc => "price-desc",
            RecordSort::Rating => "rating",
            RecordSort::DateAsc => "date-asc",
            RecordSort::DateDesc => "date-desc",
        }
    }

    /// Like [`FromStr`], but an unknown key falls back to relevance order.
    pub fn from_key(key: &str) -> Self {
        key.parse().unwrap_or_else(|_| {
            warn!(key, "unknown sort key, keeping relevance order");
            RecordSort::Relevance
        })
    }
}

impl FromStr for RecordSort {
    type Err = String;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "relevance" => Ok(RecordSort::Relevance),
            "price-asc" => Ok(RecordSort::PriceAsc),
            "price-desc" => Ok(RecordSort::PriceDesc),
            "rating" => Ok(RecordSort::Rating),
            "date-asc" => Ok(RecordSort::DateAsc),
            "date-desc" => Ok(RecordSort::DateDesc),
            other => Err(format!(
                "unknown sort key {:?} (expected one of {})",
                other,
                RecordSort::KEYS.join(", ")
            )),
        }
    }
}

impl fmt::Display for RecordSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A numeric field: JSON numbers, or strings that parse as one.
fn number_field(record: &Value, key: &str) -> Option<f64> {
    let n = match record.get(key)? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    (!n.is_nan()).then_some(n)
}

/// Milliseconds since the epoch.
///
/// Accepts RFC 3339 strings, `YYYY-MM-DDTHH:MM:SS` and `YYYY-MM-DD` (read as
/// UTC), epoch milliseconds, and `{"$date": ...}` wrappers.
fn timestamp(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            if let Ok(date) = DateTime::parse_from_rfc3339(s) {
                return Some(date.timestamp_millis());
            }
            if let Ok(date) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
                return Some(date.and_utc().timestamp_millis());
            }
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|date| date.and_utc().timestamp_millis())
        }
        Value::Object(fields) => timestamp(fields.get("$date")?),
        _ => None,
    }
}

/// Present values in the given direction, missing ones last either way.
fn missing_last<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(&T, &T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(&a, &b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort of `records` by `sort`. `Relevance` returns them as given.
pub fn sort_records<'a>(records: &[&'a Value], sort: RecordSort) -> Vec<&'a Value> {
    let mut sorted = records.to_vec();
    let price = |r: &Value| number_field(r, "price");
    let rating = |r: &Value| number_field(r, "rating").unwrap_or(0.0);
    let date = |r: &Value| r.get("date").and_then(timestamp);

    match sort {
        RecordSort::Relevance => {}
        RecordSort::PriceAsc => {
            sorted.sort_by(|a, b| missing_last(price(*a), price(*b), |x, y| x.total_cmp(y)));
        }
        RecordSort::PriceDesc => {
            sorted.sort_by(|a, b| missing_last(price(*a), price(*b), |x, y| y.total_cmp(x)));
        }
        RecordSort::Rating => {
            sorted.sort_by(|a, b| rating(*b).total_cmp(&rating(*a)));
        }
        RecordSort::DateAsc => {
            sorted.sort_by(|a, b| missing_last(date(*a), date(*b), |x, y| x.cmp(y)));
        }
        RecordSort::DateDesc => {
            sorted.sort_by(|a, b| missing_last(date(*a), date(*b), |x, y| y.cmp(x)));
        }
    }
    sorted
}
