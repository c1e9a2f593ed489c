// Copyright 2025-present fouille contributors
// SPDX-License-Identifier: Apache-2.0

//! Errors at the edges of the crate.
//!
//! Ranking itself cannot fail: any string and any slice of strings is a valid
//! input. What can fail is getting those inputs in, i.e. reading a corpus or a
//! config file, parsing JSON, or accepting a threshold that would make every
//! pair (or no pair) match.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong loading configuration or input data.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A file couldn't be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file was read but isn't the JSON we expected.
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Fuzzy match threshold outside `[0, 1)`.
    #[error("fuzzy threshold must be a number in [0, 1), got {0}")]
    InvalidThreshold(f64),

    /// Input parsed but has the wrong shape.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Error::Json {
            path: path.into(),
            source,
        }
    }
}
