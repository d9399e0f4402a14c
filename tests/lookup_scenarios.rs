//! End-to-end lookup scenarios over small ranking tables.

use serde_json::json;
use unirank::{
    ChatRoute, DetailsResult, DisplayValue, MatchTier, Table, UniversityQa, find_university,
    get_details, load_from_reader,
};

fn table_from(csv: &str) -> Table {
    load_from_reader(csv.as_bytes()).expect("fixture loads")
}

#[test]
fn mit_acronym_misses_but_full_name_matches_exactly() {
    let table = table_from(
        "Institution_Name,Overall_Score\nMassachusetts Institute of Technology,98.7\n",
    );

    assert!(find_university(&table, "MIT").is_none());
    assert_eq!(
        get_details(&table, "MIT"),
        DetailsResult::NotFound {
            query: "MIT".into(),
            message: "Sorry, could not find any university matching 'MIT'.".into(),
        }
    );

    let hit = find_university(&table, "Massachusetts Institute of Technology").expect("hit");
    assert_eq!(hit.tier, MatchTier::Exact);

    let result = get_details(&table, "Massachusetts Institute of Technology");
    assert_eq!(
        serde_json::to_value(&result).expect("serialize"),
        json!({
            "Institution_Name": "Massachusetts Institute of Technology",
            "Overall_Score": 98.7,
        })
    );
}

#[test]
fn oxford_found_by_reordered_words_and_by_fragment() {
    let table = table_from("Institution_Name\nUniversity of Oxford\n");

    let reordered = find_university(&table, "oxford university").expect("hit");
    assert_eq!(reordered.tier, MatchTier::WordSubset);
    assert_eq!(reordered.row.name(), "University of Oxford");

    let single = find_university(&table, "Oxford").expect("hit");
    assert_eq!(single.row.name(), "University of Oxford");

    let fragment = find_university(&table, "Oxf").expect("hit");
    assert_eq!(fragment.tier, MatchTier::Substring);
}

#[test]
fn first_row_in_table_order_wins_within_a_tier() {
    let table = table_from(
        "Institution_Name\n\
         Technical University of Munich\n\
         Ludwig Maximilian University of Munich\n\
         University of Munich Clinic\n",
    );
    assert_eq!(
        find_university(&table, "munich university").expect("hit").index,
        0
    );
    assert_eq!(find_university(&table, "unich").expect("hit").index, 0);
    assert_eq!(
        find_university(&table, "ludwig").expect("hit").row.name(),
        "Ludwig Maximilian University of Munich"
    );
}

#[test]
fn missing_cells_render_as_na_never_zero_or_empty() {
    let table = table_from(
        "Institution_Name,RANK_2025,Overall_Score,Region\n\
         Sample University,,not ranked,\n",
    );
    let result = get_details(&table, "sample university");
    let details = result.details().expect("found");
    for column in ["RANK_2025", "Overall_Score", "Region"] {
        assert_eq!(details.get(column), Some(&DisplayValue::NotAvailable), "{column}");
    }
    let value = serde_json::to_value(&result).expect("serialize");
    assert_eq!(value["RANK_2025"], json!("N/A"));
}

#[test]
fn details_are_idempotent() {
    let table = table_from("Institution_Name,Overall_Score\nETH Zurich,93.8\n");
    let a = serde_json::to_string(&get_details(&table, "eth")).expect("serialize");
    let b = serde_json::to_string(&get_details(&table, "eth")).expect("serialize");
    assert_eq!(a, b);
}

#[test]
fn chat_routes_known_names_to_the_table() {
    let table = table_from("Institution_Name,RANK_2025\nHarvard University,4\n");
    let qa = UniversityQa::from_table(table);

    match qa.route_chat("What are the details of Harvard University?") {
        ChatRoute::Lookup(details) => {
            assert_eq!(details.get("RANK_2025"), Some(&DisplayValue::Int(4)));
        }
        ChatRoute::Conversational => panic!("expected table lookup"),
    }
    assert_eq!(qa.route_chat("Tell me a joke"), ChatRoute::Conversational);
    assert_eq!(
        qa.route_chat("What is the rank of Atlantis University?"),
        ChatRoute::Conversational
    );
}
