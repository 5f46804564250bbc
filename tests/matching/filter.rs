//! Record filter integration tests: tier short-circuiting and fallthrough
//! over a realistic catalog.

use super::common::{record, sample_catalog};
use lector::{filter_records, filter_records_tiered, MatchTier};

// ============================================================================
// TIER SHORT-CIRCUITING
// ============================================================================

#[test]
fn exact_hit_suppresses_substring_supersets() {
    let records = vec![
        record("Juan Perez", "UCV", ""),
        record("Juan Perez Lopez", "UCV", ""),
    ];

    let hits = filter_records(&records, "juan perez");
    assert_eq!(hits.len(), 1, "substring superset must not be returned");
    assert_eq!(hits[0].name, "Juan Perez");
}

#[test]
fn substring_hit_suppresses_fuzzy() {
    let records = vec![
        record("Pedro Rojas Blanco", "UCV", ""),
        // "rojaz" is 1 edit from "rojas" but only reachable via fuzzy
        record("Rojaz", "UCV", ""),
    ];

    let (tier, hits) = filter_records_tiered(&records, "rojas").unwrap();
    assert_eq!(tier, MatchTier::Substring);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Pedro Rojas Blanco");
    let alone = filter_records_tiered(&records[1..], "rojas").unwrap();
    assert_eq!(alone.0, MatchTier::Fuzzy, "the skipped record was one fuzzy edit away");
}

#[test]
fn typo_falls_through_to_fuzzy_tier() {
    let records = vec![record("Juan Perez", "UCV", "")];

    let (tier, hits) = filter_records_tiered(&records, "jaun perez").unwrap();
    assert_eq!(tier, MatchTier::Fuzzy, "no exact or substring match for the typo");
    assert_eq!(hits.len(), 1);
}

#[test]
fn fuzzy_respects_distance_threshold() {
    let records = vec![record("Juan Perez", "UCV", "")];

    // Two transposed pairs = four edits, outside the fuzzy threshold
    assert!(filter_records(&records, "jaun peerz").is_empty());
}

// ============================================================================
// FIELD COVERAGE
// ============================================================================

#[test]
fn matches_any_of_the_three_fields() {
    let catalog = sample_catalog();

    let by_name = filter_records(&catalog, "juan perez");
    assert!(by_name.iter().all(|r| r.name == "Juan Pérez"));
    assert_eq!(by_name.len(), 1);

    let by_university = filter_records(&catalog, "universidad del zulia");
    assert_eq!(by_university.len(), 1);
    assert_eq!(by_university[0].name, "Ana Díaz");

    let by_department = filter_records(&catalog, "derecho");
    assert_eq!(by_department.len(), 1);
    assert_eq!(by_department[0].name, "María González");
}

#[test]
fn accents_are_invisible_to_matching() {
    let catalog = sample_catalog();

    // Unaccented query, accented field
    let hits = filter_records(&catalog, "economia");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].department, "Economía");

    // Accented query, same record
    let accented = filter_records(&catalog, "Economía");
    assert_eq!(accented, hits);
}

#[test]
fn shared_university_returns_all_holders() {
    let catalog = sample_catalog();
    let hits = filter_records(&catalog, "universidad central de venezuela");
    let names: Vec<&str> = hits.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Juan Pérez", "Carla Fernández"]);
}

// ============================================================================
// EDGE CASES
// ============================================================================

#[test]
fn empty_catalog_returns_empty() {
    assert!(filter_records(&[], "x").is_empty());
}

#[test]
fn empty_query_matches_everything_via_substring() {
    // Documented degenerate case: "" misses the exact tier (no empty
    // fields here), then the substring tier matches every record because
    // every string contains ""
    let catalog = sample_catalog();
    let (tier, hits) = filter_records_tiered(&catalog, "").unwrap();
    assert_eq!(tier, MatchTier::Substring);
    assert_eq!(hits.len(), catalog.len());
}

#[test]
fn punctuation_only_query_behaves_like_empty() {
    let catalog = sample_catalog();
    let hits = filter_records(&catalog, "???");
    assert_eq!(hits.len(), catalog.len());
}

#[test]
fn returns_original_field_values() {
    let catalog = sample_catalog();
    let hits = filter_records(&catalog, "ingenieria informatica");
    assert_eq!(hits[0].department, "Ingeniería Informática");
}
