// Copyright 2025-present Lector Contributors
// SPDX-License-Identifier: Apache-2.0

//! lector CLI: run the matching engine against a JSON catalog.

use std::fs;
use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use lector::{
    apply_common_corrections, expand_abbreviations, filter_records_tiered, get_suggestions,
    CatalogRecord,
};

mod cli;
use cli::display::{dim, record_line, tier_badge};
use cli::{Cli, Commands, Field};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Filter {
            catalog,
            query,
            limit,
            expand,
        } => {
            let records = load_catalog(&catalog)?;
            let query = if expand {
                expand_abbreviations(apply_common_corrections(&query)).to_string()
            } else {
                query
            };
            run_filter(&records, &query, limit);
        }
        Commands::Suggest {
            catalog,
            query,
            field,
            limit,
        } => {
            let records = load_catalog(&catalog)?;
            run_suggest(&records, &query, field, limit);
        }
        Commands::Expand { text } => {
            let corrected = apply_common_corrections(&text);
            let expanded = expand_abbreviations(corrected);
            println!("{expanded}");
        }
    }
    Ok(())
}

fn run_filter(records: &[CatalogRecord], query: &str, limit: usize) {
    match filter_records_tiered(records, query) {
        Some((tier, hits)) => {
            println!(
                "{} {} {}",
                tier_badge(tier),
                hits.len(),
                if hits.len() == 1 { "match" } else { "matches" }
            );
            for hit in hits.iter().take(limit) {
                println!("  {}", record_line(hit));
            }
            if hits.len() > limit {
                println!("  {}", dim(&format!("… and {} more", hits.len() - limit)));
            }
        }
        None => println!("no matches"),
    }
}

fn run_suggest(records: &[CatalogRecord], query: &str, field: Field, limit: usize) {
    // Distinct field values, first occurrence wins, so the resolver sees
    // each option once
    let mut options: Vec<String> = Vec::new();
    for record in records {
        let value = field.get(record);
        if !value.is_empty() && !options.iter().any(|o| o == value) {
            options.push(value.to_string());
        }
    }

    let suggestions = get_suggestions(query, &options);
    if suggestions.is_empty() {
        println!("no suggestions");
        return;
    }
    for suggestion in suggestions.iter().take(limit) {
        println!("{suggestion}");
    }
}

fn load_catalog(path: &str) -> Result<Vec<CatalogRecord>> {
    let raw = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read catalog from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read catalog {path}"))?
    };
    serde_json::from_str(&raw).context("invalid catalog JSON (expected an array of records)")
}
