// Copyright 2025-present fouille contributors
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for record search.
//!
//! Any JSON array of values can be flattened, searched and re-sorted without
//! panicking, and every record comes back exactly once.

#![no_main]

use fouille::{search_records, sort_records, FlattenConfig, Ranker, RecordSort};
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    let Ok(Value::Array(records)) = serde_json::from_slice::<Value>(data) else {
        return;
    };
    let records: Vec<Value> = records.into_iter().take(32).collect();

    let ranked = search_records(&Ranker::default(), "velo rouge", &records, &FlattenConfig::default());
    assert_eq!(ranked.len(), records.len());

    for record in &records {
        let count = ranked.iter().filter(|r| std::ptr::eq(**r, record)).count();
        assert_eq!(count, 1, "record returned {} times", count);
    }

    for key in RecordSort::KEYS {
        let sorted = sort_records(&ranked, RecordSort::from_key(key));
        assert_eq!(sorted.len(), ranked.len());
        for record in &records {
            assert_eq!(sorted.iter().filter(|r| std::ptr::eq(**r, record)).count(), 1);
        }
    }
});
