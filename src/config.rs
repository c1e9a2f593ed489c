// Copyright 2025-present fouille contributors
// SPDX-License-Identifier: Apache-2.0

//! Tunables, loadable from a JSON file.
//!
//! ```json
//! {
//!   "ranker": { "fuzzyThreshold": 0.8 },
//!   "flatten": { "excludedFields": ["image", "buyers", "_id"], "separator": " | " }
//! }
//! ```
//!
//! Every field is optional; missing ones take the defaults below, which
//! reproduce the marketplace search exactly.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fuzzy::FUZZY_MATCH_THRESHOLD;

/// Scoring parameters.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RankerConfig {
    /// Similarity a token pair must strictly exceed to count as a match.
    pub fuzzy_threshold: f64,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: FUZZY_MATCH_THRESHOLD,
        }
    }
}

impl RankerConfig {
    pub fn with_threshold(fuzzy_threshold: f64) -> Result<Self> {
        let config = Self { fuzzy_threshold };
        config.validate()?;
        Ok(config)
    }

    /// The threshold must be a finite number in `[0, 1)`. At 1 nothing could
    /// ever match, since similarity tops out at exactly 1.
    pub fn validate(&self) -> Result<()> {
        if self.fuzzy_threshold.is_finite() && (0.0..1.0).contains(&self.fuzzy_threshold) {
            Ok(())
        } else {
            Err(Error::InvalidThreshold(self.fuzzy_threshold))
        }
    }
}

/// How structured records are turned into one searchable string.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FlattenConfig {
    /// Top-level keys left out of the text (opaque or binary fields).
    pub excluded_fields: Vec<String>,
    /// Placed between field values.
    pub separator: String,
}

impl Default for FlattenConfig {
    fn default() -> Self {
        Self {
            excluded_fields: vec!["image".to_string(), "buyers".to_string(), "_id".to_string()],
            separator: " | ".to_string(),
        }
    }
}

impl FlattenConfig {
    pub fn is_excluded(&self, key: &str) -> bool {
        self.excluded_fields.iter().any(|field| field == key)
    }
}

/// Complete configuration file.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub ranker: RankerConfig,
    pub flatten: FlattenConfig,
}

impl AppConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config: AppConfig = serde_json::from_str(&content).map_err(|e| Error::json(path, e))?;
        config.ranker.validate()?;
        Ok(config)
    }
}
