// Copyright 2025-present fouille contributors
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use fouille::input::{load_corpus, load_records, read_source, CorpusFormat};
use fouille::{
    edit_distance, normalize, search_records, similarity, sort_records, AppConfig, Error, Ranker,
    RankerConfig, RecordSort, Result, ScoredDocument, TokenizedCorpus,
};

mod cli;
use cli::display::{format_query_header, format_ranked_line, format_verdict, paint, Role};
use cli::{Cli, Commands};

/// Log filter from `FOUILLE_LOG`, warnings only by default.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("FOUILLE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Config file (if any) with the command-line threshold applied on top.
fn resolve_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(threshold) = cli.threshold {
        config.ranker = RankerConfig::with_threshold(threshold)?;
    }
    Ok(config)
}

fn corpus_format(lines: bool) -> CorpusFormat {
    if lines {
        CorpusFormat::Lines
    } else {
        CorpusFormat::Json
    }
}

#[derive(Serialize)]
struct RankedEntry<'a> {
    index: usize,
    weight: f64,
    text: &'a str,
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let ranker = Ranker::new(config.ranker.clone())?;

    match cli.command {
        Commands::Tokens { text } => {
            for token in normalize(&text) {
                println!("{}", token);
            }
        }

        Commands::Similarity { a, b } => {
            let score = similarity(&a, &b);
            let threshold = ranker.config().fuzzy_threshold;
            println!("distance:   {}", edit_distance(&a, &b));
            println!("similarity: {:.4}", score);
            println!(
                "verdict:    {} (threshold > {})",
                format_verdict(score > threshold),
                threshold
            );
        }

        Commands::Rank {
            query,
            input,
            lines,
            limit,
            scores,
            json,
        } => {
            let corpus = load_corpus(input.as_deref(), corpus_format(lines))?;
            let ranked = ranker.rank_scored(&query, &corpus);
            let shown = &ranked[..limit.unwrap_or(ranked.len()).min(ranked.len())];

            if json {
                let entries: Vec<RankedEntry> = shown
                    .iter()
                    .map(|s| RankedEntry {
                        index: s.index,
                        weight: s.weight,
                        text: &corpus[s.index],
                    })
                    .collect();
                print_json(&entries)?;
            } else {
                println!("{}", format_query_header(&query, &normalize(&query)));
                for (rank, scored) in shown.iter().enumerate() {
                    let weight = scores.then_some(scored.weight);
                    println!("{}", format_ranked_line(rank + 1, weight, &corpus[scored.index]));
                }
            }
        }

        Commands::Search {
            query,
            records,
            exclude,
            sort,
            limit,
        } => {
            let records = load_records(records.as_deref())?;
            let mut flatten = config.flatten;
            if !exclude.is_empty() {
                flatten.excluded_fields = exclude;
            }

            let ranked = search_records(&ranker, &query, &records, &flatten);
            let ranked = sort_records(&ranked, RecordSort::from_key(&sort));
            let shown = &ranked[..limit.unwrap_or(ranked.len()).min(ranked.len())];
            print_json(shown)?;
        }

        Commands::Batch {
            queries,
            input,
            lines,
            limit,
        } => {
            let query_text = read_source(Some(queries.as_path()))?;
            let queries: Vec<&str> = query_text
                .lines()
                .map(str::trim)
                .filter(|q| !q.is_empty())
                .collect();
            let docs = load_corpus(Some(input.as_path()), corpus_format(lines))?;
            let corpus = TokenizedCorpus::new(&docs);

            let results = ranker.rank_batch(&queries, &corpus);
            for (query, ranked) in queries.iter().zip(&results) {
                print_batch_block(query, ranked, &docs, limit);
            }
        }
    }

    Ok(())
}

fn print_batch_block(query: &str, ranked: &[ScoredDocument], docs: &[String], limit: usize) {
    println!("{}", format_query_header(query, &normalize(query)));
    let matches: Vec<&ScoredDocument> = ranked.iter().filter(|s| s.is_match()).take(limit).collect();
    if matches.is_empty() {
        println!("     {}", paint(Role::Muted, "(no match)"));
    }
    for (rank, scored) in matches.iter().enumerate() {
        println!("{}", format_ranked_line(rank + 1, Some(scored.weight), &docs[scored.index]));
    }
    println!();
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| Error::json(Path::new("<stdout>"), e))?;
    println!("{}", text);
    Ok(())
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", paint(Role::Weak, "error:"), e);
        std::process::exit(1);
    }
}
