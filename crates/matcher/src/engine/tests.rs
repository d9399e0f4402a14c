use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use dataset::load_from_reader;
use serde_json::json;

use crate::metrics::{set_lookup_metrics, LookupMetrics};

fn table_from(csv: &str) -> Table {
    load_from_reader(csv.as_bytes()).expect("fixture loads")
}

fn rankings() -> Table {
    table_from(
        "\
Institution_Name,RANK_2025,RANK_2024,Location,Overall_Score,Sustainability_Score
Massachusetts Institute of Technology,1,1,US,98.7,99
University of Oxford,3,3,UK,96.9,
Oxford Brookes University,416,,UK,n/a,61.2
Imperial College London,2,6,UK,98.5,99.7
University College London,9,9,UK,92.5,98.8
",
    )
}

#[test]
fn exact_match_is_case_insensitive_and_trimmed() {
    let table = rankings();
    let hit = find_university(&table, "  university OF oxford ").expect("hit");
    assert_eq!(hit.tier, MatchTier::Exact);
    assert_eq!(hit.index, 1);
    assert_eq!(hit.row.name(), "University of Oxford");
}

#[test]
fn exact_tier_beats_earlier_subset_candidates() {
    // "University College London" is a token superset of "college london"
    // but "Imperial College London" comes first; exact must still win.
    let table = rankings();
    let hit = find_university(&table, "University College London").expect("hit");
    assert_eq!(hit.tier, MatchTier::Exact);
    assert_eq!(hit.index, 4);
}

#[test]
fn word_subset_ignores_order_and_takes_first_row() {
    let table = rankings();
    let hit = find_university(&table, "oxford university").expect("hit");
    assert_eq!(hit.tier, MatchTier::WordSubset);
    assert_eq!(hit.row.name(), "University of Oxford");

    let hit = find_university(&table, "college london").expect("hit");
    assert_eq!(hit.tier, MatchTier::WordSubset);
    assert_eq!(hit.row.name(), "Imperial College London");
}

#[test]
fn duplicate_query_tokens_collapse() {
    let table = rankings();
    let hit = find_university(&table, "oxford oxford").expect("hit");
    assert_eq!(hit.tier, MatchTier::WordSubset);
    assert_eq!(hit.index, 1);
}

#[test]
fn substring_tier_when_no_tokens_are_shared() {
    let table = rankings();
    let hit = find_university(&table, "xford").expect("hit");
    assert_eq!(hit.tier, MatchTier::Substring);
    assert_eq!(hit.row.name(), "University of Oxford");

    let hit = find_university(&table, "ial college lon").expect("hit");
    assert_eq!(hit.tier, MatchTier::Substring);
    assert_eq!(hit.row.name(), "Imperial College London");
}

#[test]
fn substring_is_literal_not_a_pattern() {
    let table = rankings();
    assert!(find_university(&table, "ox.ord").is_none());
    assert!(find_university(&table, "(oxford").is_none());
}

#[test]
fn empty_and_whitespace_queries_never_match() {
    let table = rankings();
    assert!(find_university(&table, "").is_none());
    assert!(find_university(&table, "   \t ").is_none());
    assert!(!get_details(&table, " ").is_found());
}

#[test]
fn acronym_does_not_match_full_name() {
    let table = rankings();
    assert!(find_university(&table, "MIT").is_none());
}

#[test]
fn details_coerce_types_and_render_missing_as_na() {
    let table = rankings();
    let result = get_details(&table, "Massachusetts Institute of Technology");
    let details = result.details().expect("found");
    assert_eq!(details.get("Overall_Score"), Some(&DisplayValue::Float(98.7)));
    assert_eq!(details.get("RANK_2025"), Some(&DisplayValue::Int(1)));
    assert_eq!(details.get("Location"), Some(&DisplayValue::Text("US".into())));

    let oxford = get_details(&table, "University of Oxford");
    let details = oxford.details().expect("found");
    assert_eq!(
        details.get("Sustainability_Score"),
        Some(&DisplayValue::NotAvailable)
    );

    let brookes = get_details(&table, "Oxford Brookes University");
    let details = brookes.details().expect("found");
    assert_eq!(details.get("RANK_2024"), Some(&DisplayValue::NotAvailable));
    assert_eq!(details.get("Overall_Score"), Some(&DisplayValue::NotAvailable));
}

#[test]
fn details_follow_allowlist_order_and_skip_absent_columns() {
    let table = rankings();
    let result = get_details(&table, "imperial college london");
    let value = serde_json::to_value(&result).expect("serialize");
    assert_eq!(
        value,
        json!({
            "Institution_Name": "Imperial College London",
            "RANK_2025": 2,
            "RANK_2024": 6.0,
            "Location": "UK",
            "Sustainability_Score": 99.7,
            "Overall_Score": 98.5,
        })
    );

    let keys: Vec<&str> = result
        .details()
        .expect("found")
        .fields()
        .iter()
        .map(|(k, _)| k.as_str())
        .collect();
    assert_eq!(
        keys,
        vec![
            "Institution_Name",
            "RANK_2025",
            "RANK_2024",
            "Location",
            "Sustainability_Score",
            "Overall_Score"
        ]
    );
}

#[test]
fn not_found_echoes_query_verbatim() {
    let table = rankings();
    let result = get_details(&table, "  Hogwarts School ");
    assert_eq!(
        result,
        DetailsResult::NotFound {
            query: "  Hogwarts School ".into(),
            message: "Sorry, could not find any university matching '  Hogwarts School '.".into(),
        }
    );
}

#[test]
fn get_details_is_idempotent() {
    let table = rankings();
    let first = get_details(&table, "oxford");
    let second = get_details(&table, "oxford");
    assert_eq!(first, second);
}

#[test]
fn stored_names_are_not_mutated_by_lookups() {
    let table = rankings();
    let before = table.clone();
    let _ = get_details(&table, "OXFORD");
    let _ = find_university(&table, "college");
    assert_eq!(table, before);
}

#[derive(Default)]
struct CountingMetrics {
    calls: AtomicUsize,
    tiers: Mutex<Vec<Option<MatchTier>>>,
}

impl LookupMetrics for CountingMetrics {
    fn record_lookup(&self, _latency: Duration, tier: Option<MatchTier>) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.tiers.lock().expect("tiers lock").push(tier);
    }
}

#[test]
fn metrics_recorder_sees_every_lookup() {
    let recorder = Arc::new(CountingMetrics::default());
    set_lookup_metrics(Some(recorder.clone()));

    let table = rankings();
    let _ = find_university(&table, "University of Oxford");
    let _ = find_university(&table, "xford");
    let _ = find_university(&table, "nowhere at all");

    set_lookup_metrics(None);

    // Other tests may run lookups concurrently while the recorder is installed.
    assert!(recorder.calls.load(Ordering::SeqCst) >= 3);
    let tiers = recorder.tiers.lock().expect("tiers lock");
    assert!(tiers.contains(&Some(MatchTier::Exact)));
    assert!(tiers.contains(&Some(MatchTier::Substring)));
    assert!(tiers.contains(&None));
}
