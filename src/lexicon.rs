// Copyright 2025-present Lector Contributors
// SPDX-License-Identifier: Apache-2.0

//! Static correction and abbreviation tables.
//!
//! Two flat lookup tables keyed by normalized text. The correction table
//! restores the canonical accented spelling of words users habitually type
//! without accents ("ingenieria" → "ingeniería"); the abbreviation table
//! expands the acronyms everyone actually searches by ("ucab" → the full
//! university name). A miss is the common case, not an error - both
//! functions hand the input back unchanged.
//!
//! The slices are the source of truth; a `OnceLock`-cached `HashMap` is
//! built from each on first lookup. Keys must be fixed points of
//! [`normalize`] - there is a test for that, so adding an accented key
//! fails loudly instead of never matching.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::normalize::normalize;

/// Normalized misspelling/unaccented form → canonical accented form.
static CORRECTIONS: &[(&str, &str)] = &[
    ("administracion", "administración"),
    ("biologia", "biología"),
    ("comunicacion", "comunicación"),
    ("comunicacion social", "comunicación social"),
    ("economia", "economía"),
    ("educacion", "educación"),
    ("filosofia", "filosofía"),
    ("fisica", "física"),
    ("ingenieria", "ingeniería"),
    ("ingenieria civil", "ingeniería civil"),
    ("ingenieria industrial", "ingeniería industrial"),
    ("ingenieria informatica", "ingeniería informática"),
    ("matematicas", "matemáticas"),
    ("psicologia", "psicología"),
    ("quimica", "química"),
    ("teologia", "teología"),
];

/// Normalized abbreviation → full expansion.
static ABBREVIATIONS: &[(&str, &str)] = &[
    ("luz", "universidad del zulia"),
    ("ucab", "universidad católica andrés bello"),
    ("ucla", "universidad centroccidental lisandro alvarado"),
    ("ucv", "universidad central de venezuela"),
    ("udo", "universidad de oriente"),
    ("ula", "universidad de los andes"),
    ("unefa", "universidad nacional experimental de la fuerza armada"),
    ("unexpo", "universidad nacional experimental politécnica antonio josé de sucre"),
    ("unimet", "universidad metropolitana"),
    ("usb", "universidad simón bolívar"),
    ("usm", "universidad santa maría"),
];

fn correction_map() -> &'static HashMap<&'static str, &'static str> {
    static MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| CORRECTIONS.iter().copied().collect())
}

fn abbreviation_map() -> &'static HashMap<&'static str, &'static str> {
    static MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| ABBREVIATIONS.iter().copied().collect())
}

/// Replace a commonly misspelled or unaccented term with its canonical form.
///
/// The input is normalized for the lookup only; on a miss the original
/// (unnormalized) input comes back unchanged.
pub fn apply_common_corrections(text: &str) -> &str {
    correction_map()
        .get(normalize(text).as_str())
        .copied()
        .unwrap_or(text)
}

/// Expand a known abbreviation to its full form.
///
/// Same lookup-or-passthrough contract as [`apply_common_corrections`].
pub fn expand_abbreviations(text: &str) -> &str {
    abbreviation_map()
        .get(normalize(text).as_str())
        .copied()
        .unwrap_or(text)
}

/// Raw correction entries, for tests and tooling.
pub fn correction_entries() -> &'static [(&'static str, &'static str)] {
    CORRECTIONS
}

/// Raw abbreviation entries, for tests and tooling.
pub fn abbreviation_entries() -> &'static [(&'static str, &'static str)] {
    ABBREVIATIONS
}
