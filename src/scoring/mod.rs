// Copyright 2025-present fouille contributors
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how documents get their weights, and how weights
//! become an order.
//!
//! Weights come from a fuzzy TF-IDF: every document position that fuzzily
//! matches a query token adds `(TF + IDF) × similarity`. The order is a stable
//! sort on those weights, so documents nobody matched keep their input order.

mod core;
pub mod ranking;

pub use self::core::*;
