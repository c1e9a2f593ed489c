// Copyright 2025-present fouille contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the fouille command-line interface.
//!
//! Five subcommands: `tokens` and `similarity` to inspect the matcher, `rank`
//! to order a list of documents, `search` to order structured records, and
//! `batch` to run many queries against one corpus.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fouille",
    about = "Typo-tolerant ranking of French documents",
    version
)]
pub struct Cli {
    /// JSON config file (ranker threshold, record flattening)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the fuzzy match threshold (similarity must be strictly above it)
    #[arg(long, global = true)]
    pub threshold: Option<f64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the tokens a text normalizes to
    Tokens {
        /// Text to normalize
        text: String,
    },

    /// Compare two words the way the ranker does
    Similarity {
        a: String,
        b: String,
    },

    /// Rank a list of documents against a query
    Rank {
        /// Search query
        query: String,

        /// Corpus file: JSON array of strings (stdin if omitted or "-")
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Read one document per line instead of a JSON array
        #[arg(long)]
        lines: bool,

        /// Maximum number of documents to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print each document's weight
        #[arg(long)]
        scores: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rank structured records (JSON objects) against a query
    Search {
        /// Search query
        query: String,

        /// Records file: JSON array of objects (stdin if omitted or "-")
        #[arg(short, long)]
        records: Option<PathBuf>,

        /// Field to leave out of the searchable text (repeatable; replaces
        /// the configured list)
        #[arg(long = "exclude")]
        exclude: Vec<String>,

        /// Re-sort results: price-asc, price-desc, rating, date-asc or
        /// date-desc (any other key keeps relevance order)
        #[arg(long, default_value = "relevance")]
        sort: String,

        /// Maximum number of records to print
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Rank one corpus against many queries
    Batch {
        /// Queries file, one query per line
        #[arg(short, long)]
        queries: PathBuf,

        /// Corpus file: JSON array of strings
        #[arg(short, long)]
        input: PathBuf,

        /// Read the corpus one document per line
        #[arg(long)]
        lines: bool,

        /// Results to show per query
        #[arg(short, long, default_value = "3")]
        limit: usize,
    },
}
