// Copyright 2025-present Lector Contributors
// SPDX-License-Identifier: Apache-2.0

//! Suggestion resolver: union of all four match tiers.
//!
//! Unlike the record filter, suggestions do NOT short-circuit. Every tier
//! filters the full option list against the normalized input, the four
//! result sets are concatenated in tier order, and duplicates keep their
//! first (best-tier) position. An option matching both Exact and Fuzzy
//! appears once, in the Exact slot. A completion dropdown wants every
//! plausible option visible at once, ranked by match quality - that is the
//! whole reason this path differs from [`crate::filter_records`].

use std::collections::HashSet;

use crate::normalize::normalize;
use crate::types::MatchTier;

/// Rank candidate options against free-text input.
///
/// Returns the original (non-normalized) option strings, deduplicated,
/// ordered exact → prefix → substring → fuzzy with first-occurrence order
/// preserved inside each tier. Empty when nothing matches.
pub fn get_suggestions<'a>(input: &str, options: &'a [String]) -> Vec<&'a str> {
    let query = normalize(input);
    let candidates: Vec<String> = options.iter().map(|opt| normalize(opt)).collect();

    let mut seen: HashSet<&str> = HashSet::with_capacity(options.len());
    let mut suggestions = Vec::new();

    for tier in MatchTier::ALL {
        for (option, candidate) in options.iter().zip(&candidates) {
            if tier.matches(candidate, &query) && seen.insert(option.as_str()) {
                suggestions.push(option.as_str());
            }
        }
    }

    suggestions
}
