// Copyright 2025-present fouille contributors
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the tokenizer.
//!
//! Whatever the input, tokens are non-empty `[a-z0-9]+` words that are not
//! stop words, and normalizing the tokens again changes nothing.

#![no_main]

use fouille::{is_stop_word, normalize};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let tokens = normalize(&text);

    for token in &tokens {
        assert!(!token.is_empty());
        assert!(
            token.bytes().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
            "unclean token {:?}",
            token
        );
        assert!(!is_stop_word(token), "stop word {:?} survived", token);
    }

    assert_eq!(normalize(&tokens.join(" ")), tokens);
});
