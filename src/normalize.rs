// Copyright 2025-present Lector Contributors
// SPDX-License-Identifier: Apache-2.0

//! Text normalization for comparison.
//!
//! Every matching decision in this crate happens over normalized text, so
//! "Economía", "economia" and "  ECONOMIA!! " all land on the same string.
//! The output alphabet is strictly `[a-z0-9 ]` with single internal spaces,
//! which keeps every downstream comparison a plain byte comparison.
//!
//! # Algorithm
//!
//! 1. NFD normalize (decompose characters into base + combining marks)
//! 2. Filter out combining marks (category Mn = Mark, Nonspacing)
//! 3. Lowercase
//! 4. Drop everything outside `[a-z0-9]` and whitespace
//! 5. Collapse whitespace runs and trim

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching: lowercase, strip diacritics, drop
/// punctuation, and collapse whitespace.
///
/// This enables matching between ASCII and accented versions:
/// - "Economía" → "economia"
/// - "Muñoz" → "munoz"
/// - "Ingeniería  Informática" → "ingenieria informatica"
///
/// Total over any input; the empty string normalizes to itself. Idempotent:
/// normalizing an already-normalized string is a no-op.
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
