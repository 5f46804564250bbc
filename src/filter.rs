// Copyright 2025-present Lector Contributors
// SPDX-License-Identifier: Apache-2.0

//! Record filter: tiered short-circuit over a catalog snapshot.
//!
//! Three tiers, evaluated in order: exact → substring → fuzzy. The first
//! tier with hits wins and the rest never run, so an exact hit suppresses
//! every substring superset and every fuzzy near-miss. There is no prefix
//! tier here - "starts with X" implies "contains X", so substring covers
//! it. This short-circuiting is the observable difference from the
//! suggestion resolver, which unions all tiers; see [`MatchTier`].
//!
//! A record matches a tier when ANY of its three fields (name, university,
//! department) matches. Field normalizations are computed once per call,
//! not once per tier.

use crate::normalize::normalize;
use crate::types::{CatalogRecord, MatchTier};

/// Tiers the record filter walks, in order. No `Prefix`: subsumed by
/// `Substring`.
const FILTER_TIERS: [MatchTier; 3] =
    [MatchTier::Exact, MatchTier::Substring, MatchTier::Fuzzy];

/// Filter a catalog snapshot against a free-text query.
///
/// Returns references into `records` (original, non-normalized values) in
/// input order, from the highest tier that produced any hit. Empty when
/// even the fuzzy tier finds nothing.
///
/// An empty query is an edge case inherited from the surrounding
/// application: it can only hit the exact tier on records with an empty
/// field, and otherwise degenerates to the substring tier matching every
/// record (every string contains ""). Callers that don't want that should
/// gate empty input before calling.
pub fn filter_records<'a>(records: &'a [CatalogRecord], query: &str) -> Vec<&'a CatalogRecord> {
    filter_records_tiered(records, query)
        .map(|(_, hits)| hits)
        .unwrap_or_default()
}

/// Like [`filter_records`], but also reports which tier produced the hits.
///
/// `None` means no tier matched anything.
pub fn filter_records_tiered<'a>(
    records: &'a [CatalogRecord],
    query: &str,
) -> Option<(MatchTier, Vec<&'a CatalogRecord>)> {
    let query = normalize(query);
    let fields: Vec<[String; 3]> = records
        .iter()
        .map(CatalogRecord::normalized_fields)
        .collect();

    for tier in FILTER_TIERS {
        let hits: Vec<&CatalogRecord> = records
            .iter()
            .zip(&fields)
            .filter(|(_, fields)| fields.iter().any(|field| tier.matches(field, &query)))
            .map(|(record, _)| record)
            .collect();

        if !hits.is_empty() {
            return Some((tier, hits));
        }
    }

    None
}
