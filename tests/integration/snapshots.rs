//! Serialized snapshots of the output model.

use super::common::{analyze_ok, full_options};
use bwt_suite::AnalyzeOptions;
use serde_json::Value;

fn snapshot(input: &str, options: AnalyzeOptions) -> Value {
    let json = analyze_ok(input, options).to_json().expect("serializable");
    serde_json::from_str(&json).expect("valid JSON")
}

#[test]
fn json_is_byte_identical_across_runs() {
    let input = "how$now$brown$cow$#";
    let first = analyze_ok(input, full_options(input)).to_json().expect("serializable");
    let second = analyze_ok(input, full_options(input)).to_json().expect("serializable");
    assert_eq!(first, second);
}

#[test]
fn snapshot_carries_the_arrays() {
    let value = snapshot("abaaba$", AnalyzeOptions::default());
    assert_eq!(value["index"]["sa"], serde_json::json!([6, 5, 2, 3, 0, 4, 1]));
    assert_eq!(
        value["core"]["lcp"]["values"],
        serde_json::json!([0, 0, 1, 1, 3, 0, 2])
    );
    assert_eq!(value["core"]["lcp"]["placeholder"], serde_json::json!(0));
    assert_eq!(value["core"]["bwt"], serde_json::json!(["a", "b", "b", "a", "$", "a", "a"]));
}

#[test]
fn run_sets_are_keyed_by_array_name() {
    let value = snapshot("abaaba$", AnalyzeOptions::default());
    let runs = value["runs"].as_object().expect("runs map");
    let keys: Vec<&str> = runs.keys().map(String::as_str).collect();
    for expected in ["Lf", "Fl", "Phi", "PhiInverse", "Plcp", "Plcs"] {
        assert!(keys.contains(&expected), "{keys:?}");
    }
    assert_eq!(runs["Lf"][0]["start"], serde_json::json!(1));
    assert_eq!(runs["Lf"][0]["direction"], serde_json::json!("Increasing"));
}

#[test]
fn optional_sections_serialize_as_null() {
    let value = snapshot("GATTACA$", AnalyzeOptions::default());
    assert!(value["thresholds"].is_null());
    assert!(value["mums"].is_null());

    let value = snapshot("ab$ab$#", AnalyzeOptions::default().with_mums(true));
    assert_eq!(value["mums"][0]["length"], serde_json::json!(3));
    assert_eq!(value["mums"][0]["rows"], serde_json::json!({"start": 3, "end": 5}));
}

#[test]
fn threshold_cells_are_tagged() {
    let value = snapshot("GATTACA$", AnalyzeOptions::default().with_thresholds(true));
    let columns = value["thresholds"]["columns"].as_array().expect("columns");
    assert_eq!(columns[0]["symbol"], serde_json::json!("$"));
    assert_eq!(columns[1]["cells"][0], serde_json::json!("Match"));
    assert_eq!(
        columns[1]["cells"][6],
        serde_json::json!({"Jump": {"lcp": 1, "direction": "Down"}})
    );
}
