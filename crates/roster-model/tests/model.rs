//! Tests for roster-model types.

use roster_model::{FieldNaming, FieldValue, FlatRecord, RosterError};
use serde_json::json;

#[test]
fn flat_record_from_json_object() {
    let record = FlatRecord::from_json(&json!({
        "grade": "O3",
        "course_date_1": 18262,
        "acft_hist_hrs_1": 7.25,
        "course_2": null,
        "vml": true
    }))
    .expect("flat object");

    assert_eq!(record.len(), 5);
    assert_eq!(record.get("grade"), Some(&FieldValue::from("O3")));
    assert_eq!(record.get("course_date_1"), Some(&FieldValue::Int(18262)));
    assert_eq!(record.get("acft_hist_hrs_1"), Some(&FieldValue::Float(7.25)));
    assert_eq!(record.get("course_2"), Some(&FieldValue::Null));
    assert_eq!(record.get("vml"), Some(&FieldValue::Int(1)));
}

#[test]
fn non_object_input_is_invalid() {
    for value in [json!([1, 2, 3]), json!("O3"), json!(null), json!(12)] {
        let err = FlatRecord::from_json(&value).expect_err("not a mapping");
        assert!(matches!(err, RosterError::InvalidInput(_)), "{value}");
    }
}

#[test]
fn nested_field_value_is_invalid() {
    let err = FlatRecord::from_json(&json!({ "grade": "O3", "courses": ["SOS"] }))
        .expect_err("nested value");
    let RosterError::InvalidInput(message) = err else {
        panic!("expected InvalidInput");
    };
    assert!(message.contains("courses"));
}

#[test]
fn flat_record_collects_pairs() {
    let mut record: FlatRecord = [("grade", "O3"), ("grade_proj", "O4")].into_iter().collect();
    record.insert("course_1", "SOS");
    assert_eq!(record.keys().collect::<Vec<_>>(), vec!["course_1", "grade", "grade_proj"]);
    assert_eq!(record.remove("grade"), Some(FieldValue::from("O3")));
    assert!(!record.contains_key("grade"));
}

#[test]
fn naming_applies_prefix_to_all_fields() {
    let plain = FieldNaming::default();
    assert_eq!(plain.key("grade"), "grade");
    assert_eq!(plain.indexed_key("course_date", 3), "course_date_3");

    let underscored = FieldNaming::with_prefix("_");
    assert_eq!(underscored.key("grade"), "_grade");
    assert_eq!(underscored.indexed_key("course", 1), "_course_1");
}
