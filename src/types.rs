// Copyright 2025-present Lector Contributors
// SPDX-License-Identifier: Apache-2.0

//! Shared types: catalog records and match tiers.

use serde::{Deserialize, Serialize};

use crate::fuzzy::{levenshtein_within, MAX_EDIT_DISTANCE};
use crate::normalize::normalize;

/// One searchable entry in a catalog snapshot.
///
/// The three textual fields are what matching looks at; `id` is opaque and
/// carried through unchanged. All fields default to the empty string on
/// deserialization - a record missing `department` in the source JSON is
/// treated as having an empty one, so the matcher stays total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// Opaque identity, never interpreted by the matcher.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub university: String,
    #[serde(default)]
    pub department: String,
}

impl CatalogRecord {
    /// Normalized forms of the three searchable fields, in a fixed order.
    pub(crate) fn normalized_fields(&self) -> [String; 3] {
        [
            normalize(&self.name),
            normalize(&self.university),
            normalize(&self.department),
        ]
    }
}

/// One matching strategy, in priority order.
///
/// The suggestion resolver unions ALL tiers and dedupes; the record filter
/// short-circuits on the first tier with hits and skips `Prefix` entirely
/// (a string starting with the query also contains it, so substring
/// subsumes prefix there). That asymmetry is deliberate: a definitive
/// result list should not drown exact hits in fuzzy noise, while a
/// completion dropdown benefits from showing every plausible option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    /// Normalized equality.
    Exact,
    /// Candidate starts with the query.
    Prefix,
    /// Candidate contains the query.
    Substring,
    /// Candidate within [`MAX_EDIT_DISTANCE`] edits of the query.
    Fuzzy,
}

impl MatchTier {
    /// All tiers in evaluation order.
    pub const ALL: [MatchTier; 4] = [
        MatchTier::Exact,
        MatchTier::Prefix,
        MatchTier::Substring,
        MatchTier::Fuzzy,
    ];

    /// Does `candidate` match `query` under this tier?
    ///
    /// Both arguments must already be normalized; the tiers themselves
    /// never re-normalize.
    pub fn matches(self, candidate: &str, query: &str) -> bool {
        match self {
            MatchTier::Exact => candidate == query,
            MatchTier::Prefix => candidate.starts_with(query),
            MatchTier::Substring => candidate.contains(query),
            MatchTier::Fuzzy => levenshtein_within(candidate, query, MAX_EDIT_DISTANCE),
        }
    }

    /// Short lowercase label, for CLI badges and logs.
    pub fn label(self) -> &'static str {
        match self {
            MatchTier::Exact => "exact",
            MatchTier::Prefix => "prefix",
            MatchTier::Substring => "substring",
            MatchTier::Fuzzy => "fuzzy",
        }
    }
}
