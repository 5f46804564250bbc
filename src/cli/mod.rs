// Copyright 2025-present Lector Contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lector command-line interface.
//!
//! Three subcommands: `filter` runs the tiered record filter over a JSON
//! catalog, `suggest` ranks one field's values as completions, and
//! `expand` shows what the correction/abbreviation tables do to a query.
//! Catalogs are JSON arrays of records; `-` reads the catalog from stdin.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "lector",
    about = "Accent- and typo-tolerant catalog matching",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter catalog records with tiered short-circuit matching
    Filter {
        /// Path to a catalog JSON file (array of records), or "-" for stdin
        catalog: String,

        /// Search query
        query: String,

        /// Maximum number of records to display
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Expand abbreviations and corrections before matching
        #[arg(long)]
        expand: bool,
    },

    /// Suggest completions for one field across the catalog
    Suggest {
        /// Path to a catalog JSON file (array of records), or "-" for stdin
        catalog: String,

        /// Search query
        query: String,

        /// Field to draw candidate options from
        #[arg(short, long, value_enum, default_value = "university")]
        field: Field,

        /// Maximum number of suggestions to display
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show the correction and abbreviation tables applied to a query
    Expand {
        /// Query text
        text: String,
    },
}

/// Which record field feeds the suggestion resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Field {
    Name,
    University,
    Department,
}

impl Field {
    /// Project one field out of a record.
    pub fn get<'a>(self, record: &'a lector::CatalogRecord) -> &'a str {
        match self {
            Field::Name => &record.name,
            Field::University => &record.university,
            Field::Department => &record.department,
        }
    }
}
