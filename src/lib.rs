//! Accent- and typo-tolerant catalog matching with tiered resolution.
//!
//! This crate resolves free-text search queries (teacher names,
//! universities, departments, abbreviations) against a small catalog
//! despite typos, accents, and abbreviations. It is a bounded, small-N
//! matcher meant to run inside a single request, not a search service:
//! no index, no persistence, every call is a pure function over its
//! arguments.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌───────────────┐
//! │ normalize.rs │────▶│   types.rs   │────▶│  suggest.rs   │
//! │ (normalize)  │     │ (MatchTier,  │     │  filter.rs    │
//! │              │     │CatalogRecord)│     │ (resolvers)   │
//! └──────────────┘     └──────────────┘     └───────────────┘
//!        │                    │
//!        ▼                    ▼
//! ┌──────────────┐     ┌──────────────┐
//! │  lexicon.rs  │     │   fuzzy/     │
//! │ (corrections,│     │ (levenshtein │
//! │abbreviations)│     │  distances)  │
//! └──────────────┘     └──────────────┘
//! ```
//!
//! The two resolvers walk the same [`MatchTier`] ladder but disagree on
//! purpose: [`get_suggestions`] unions every tier (a dropdown wants all
//! plausible completions), while [`filter_records`] stops at the first
//! tier with hits (a result list should not drown exact matches in fuzzy
//! noise).
//!
//! # Usage
//!
//! ```
//! use lector::{filter_records, get_suggestions, CatalogRecord};
//!
//! let catalog = vec![CatalogRecord {
//!     id: "1".into(),
//!     name: "Juan Pérez".into(),
//!     university: "Universidad Central de Venezuela".into(),
//!     department: "Economía".into(),
//! }];
//!
//! // Typo-tolerant: "jaun perez" is two edits from "juan perez"
//! let hits = filter_records(&catalog, "jaun perez");
//! assert_eq!(hits.len(), 1);
//!
//! let unis = vec!["UCV".to_string(), "UCAB".to_string()];
//! assert_eq!(get_suggestions("ucv", &unis), vec!["UCV", "UCAB"]);
//! ```

mod filter;
mod fuzzy;
mod lexicon;
mod normalize;
mod suggest;
mod types;

pub use filter::{filter_records, filter_records_tiered};
pub use fuzzy::{levenshtein_distance, levenshtein_within, MAX_EDIT_DISTANCE};
pub use lexicon::{
    abbreviation_entries, apply_common_corrections, correction_entries, expand_abbreviations,
};
pub use normalize::normalize;
pub use suggest::get_suggestions;
pub use types::{CatalogRecord, MatchTier};
