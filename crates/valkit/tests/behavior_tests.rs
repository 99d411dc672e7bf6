// SPDX-License-Identifier: MIT OR Apache-2.0
//! End-to-end behaviour of the array and object helpers through the
//! umbrella crate.

use serde_json::json;
use valkit::prelude::*;

// =============================================================================
// Duplicates
// =============================================================================

#[test]
fn duplicates_detected_only_when_repeated() {
    assert!(!has_duplicate_values(&[1, 2, 3]));
    assert!(has_duplicate_values(&[1, 2, 2]));
}

#[test]
fn duplicates_in_json_sequences() {
    let doc = json!([{"id": 1}, {"id": 2}, {"id": 1}]);
    let items = doc.as_array().unwrap();
    assert!(has_duplicate_json_values(items));

    let ids: Vec<Value> = items.iter().filter_map(|v| v.get("id").cloned()).collect();
    assert!(has_duplicate_json_values(&ids));
    assert!(!has_duplicate_json_values(&ids[..2]));
}

// =============================================================================
// Sorting
// =============================================================================

#[test]
fn sorts_raw_elements() {
    let mut values = vec![3, 1, 2];
    assert_eq!(sort_ascending(&mut values), [1, 2, 3]);

    let mut values = vec![3, 1, 2];
    assert_eq!(sort_descending(&mut values), [3, 2, 1]);
}

#[test]
fn sorts_by_field() {
    let mut values = vec![json!({"a": 2}), json!({"a": 1})];
    sort_values_ascending(&mut values, &SortKey::field("a"));
    assert_eq!(values, [json!({"a": 1}), json!({"a": 2})]);
}

#[test]
fn sorts_by_nested_field_parsed_from_text() {
    let mut rows = vec![
        json!({"name": "c", "stats": {"score": 7}}),
        json!({"name": "a", "stats": {"score": 9}}),
        json!({"name": "b", "stats": {"score": 8}}),
    ];
    let key: SortKey = "stats.score".parse().unwrap();
    sort_values(&mut rows, &key, SortOrder::Descending);
    let names: Vec<_> = rows.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn sorting_sorted_input_is_idempotent() {
    let mut values = vec![json!(1), json!(2), json!(2), json!(5)];
    let before = values.clone();
    sort_values_ascending(&mut values, &SortKey::none());
    assert_eq!(values, before);

    let mut values = vec![9, 4, 4, 0];
    let before = values.clone();
    assert_eq!(sort_descending(&mut values), before.as_slice());
}

#[test]
fn sort_returns_the_same_storage() {
    let mut values = vec![json!(2), json!(1)];
    let ptr = values.as_ptr();
    let sorted = sort_values_ascending(&mut values, &SortKey::none());
    assert_eq!(sorted.as_ptr(), ptr);
}

// =============================================================================
// Path resolution
// =============================================================================

#[test]
fn resolves_nested_path() {
    assert_eq!(resolve_path("a.b", &json!({"a": {"b": 5}})), Some(&json!(5)));
}

#[test]
fn null_intermediate_is_missing() {
    assert_eq!(resolve_path("a.b", &json!({"a": null})), None);
}

#[test]
fn empty_path_is_missing() {
    let obj = json!({"a": 1});
    assert_eq!(resolve_path("", &obj), None);
}

#[test]
fn resolves_pre_split_and_parsed_paths_alike() {
    let doc = json!({"config": {"servers": [{"host": "a"}, {"host": "b"}]}});
    let parsed = ValuePath::parse("config.servers.1.host").unwrap();
    let split = ["config", "servers", "1", "host"];
    assert_eq!(resolve_path(&parsed, &doc), Some(&json!("b")));
    assert_eq!(resolve_path(&split, &doc), resolve_path(&parsed, &doc));
    assert_eq!(resolve_path(&parsed.to_string(), &doc), Some(&json!("b")));
}

// =============================================================================
// First property
// =============================================================================

#[test]
fn first_property_follows_insertion_order() {
    let doc = json!({"x": 1, "y": 2});
    assert_eq!(get_first_property(doc.as_object().unwrap()), Some(&json!(1)));
    assert_eq!(first_property_of(&json!({})), None);
}

#[test]
fn first_property_after_parsing_text() {
    let doc: Value = serde_json::from_str(r#"{"b": "first", "a": "second"}"#).unwrap();
    assert_eq!(first_property_of(&doc), Some(&json!("first")));
}
