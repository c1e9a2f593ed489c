// Copyright 2025-present fouille contributors
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Two tokens are "the same word" when their normalized Levenshtein similarity
//! is strictly above [`FUZZY_MATCH_THRESHOLD`]. That lets "pomme" match
//! "pommes" (0.83) and "ordinateur" match "ordinater" (0.9), while keeping
//! "chat" away from "char" (0.75).

mod levenshtein;

pub use levenshtein::*;
