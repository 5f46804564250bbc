//! Lexicon tests: correction/abbreviation lookup feeding the matchers.

use super::common::sample_catalog;
use lector::{
    abbreviation_entries, apply_common_corrections, correction_entries, expand_abbreviations,
    filter_records, normalize,
};

#[test]
fn corrections_restore_accents() {
    assert_eq!(apply_common_corrections("ingenieria"), "ingeniería");
    assert_eq!(apply_common_corrections("Economia"), "economía");
}

#[test]
fn abbreviations_expand_to_full_names() {
    assert_eq!(expand_abbreviations("UCV"), "universidad central de venezuela");
    assert_eq!(
        expand_abbreviations("ucab"),
        "universidad católica andrés bello"
    );
}

#[test]
fn unknown_text_passes_through_unchanged() {
    for text in ["derecho", "MIT", "", "  universidad  "] {
        assert_eq!(apply_common_corrections(text), text);
        assert_eq!(expand_abbreviations(text), text);
    }
}

#[test]
fn every_table_key_is_normalized() {
    for (key, _) in correction_entries().iter().chain(abbreviation_entries()) {
        assert_eq!(&normalize(key), key);
    }
}

#[test]
fn expanded_abbreviation_matches_catalog() {
    // The pipeline the application runs: expand, then filter. "ucv" alone
    // misses every field in this catalog; expanded it hits exactly.
    let catalog = sample_catalog();
    let expanded = expand_abbreviations("ucv");
    let hits = filter_records(&catalog, expanded);
    assert_eq!(hits.len(), 2);
    assert!(hits
        .iter()
        .all(|r| r.university == "Universidad Central de Venezuela"));
}

#[test]
fn corrected_department_matches_catalog() {
    let catalog = sample_catalog();
    let corrected = apply_common_corrections("filosofia");
    let hits = filter_records(&catalog, corrected);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Luis Muñoz");
}
