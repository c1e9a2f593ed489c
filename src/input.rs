// Copyright 2025-present fouille contributors
// SPDX-License-Identifier: Apache-2.0

//! Reading corpora and records from files or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};

/// How a corpus file lays out its documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorpusFormat {
    /// A JSON array of strings.
    #[default]
    Json,
    /// One document per line. Blank lines are documents too.
    Lines,
}

/// Read a whole file, or stdin when `path` is `None` or `-`.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => fs::read_to_string(p).map_err(|e| Error::io(p, e)),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| Error::io("<stdin>", e))?;
            Ok(buffer)
        }
    }
}

/// Parse a corpus. `origin` only shows up in error messages.
pub fn parse_corpus(content: &str, format: CorpusFormat, origin: &Path) -> Result<Vec<String>> {
    match format {
        CorpusFormat::Json => serde_json::from_str(content).map_err(|e| Error::json(origin, e)),
        CorpusFormat::Lines => Ok(content.lines().map(str::to_owned).collect()),
    }
}

/// Parse a JSON array of records.
pub fn parse_records(content: &str, origin: &Path) -> Result<Vec<Value>> {
    match serde_json::from_str(content).map_err(|e| Error::json(origin, e))? {
        Value::Array(records) => Ok(records),
        other => Err(Error::InvalidInput(format!(
            "{}: expected a JSON array of records, found {}",
            origin.display(),
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Load a corpus file (or stdin).
pub fn load_corpus(path: Option<&Path>, format: CorpusFormat) -> Result<Vec<String>> {
    let content = read_source(path)?;
    parse_corpus(&content, format, path.unwrap_or(Path::new("<stdin>")))
}

/// Load a records file (or stdin).
pub fn load_records(path: Option<&Path>) -> Result<Vec<Value>> {
    let content = read_source(path)?;
    parse_records(&content, path.unwrap_or(Path::new("<stdin>")))
}
