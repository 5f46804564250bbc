// Copyright 2025-present Lector Contributors
// SPDX-License-Identifier: Apache-2.0

//! Edit-distance engine for the fuzzy tier.

mod levenshtein;

pub use levenshtein::{levenshtein_distance, levenshtein_within};

/// Maximum edit distance accepted by the fuzzy tier.
///
/// Two edits tolerate a transposed pair ("jaun" → "juan") or a dropped
/// accent plus a typo without flooding results for short queries. Raising
/// this makes three-letter abbreviations match almost everything.
pub const MAX_EDIT_DISTANCE: usize = 2;
