//! End-to-end tests for the decode pipeline behind `roster decode`.

use std::fs;
use std::path::{Path, PathBuf};

use roster_cli::decode::{
    OptionOverrides, apply_overrides, decode_inputs, load_options, write_response,
};
use roster_model::{ConsumptionMode, DecodeOptions, FieldValue};
use serde_json::Value;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn csv_folder_decodes_into_envelope() {
    let dir = TempDir::new().expect("temp dir");
    let inputs = dir.path().join("inputs");
    fs::create_dir(&inputs).expect("create inputs");
    write(
        &inputs,
        "a.csv",
        "ID,grade,course_1,course_date_1,favorite_color\n\
         1001,O3,SOS,18263,blue\n\
         1002,O4,,,\n",
    );
    write(&inputs, "b.json", r#"[{ "ID": 2001, "grade": "O5" }]"#);

    let run = decode_inputs(&[inputs], &DecodeOptions::default()).expect("decode");
    assert!(!run.has_errors());
    assert_eq!(run.files.len(), 2);
    assert_eq!(run.files[0].records, 2);
    assert_eq!(run.files[0].unmapped_fields, 1);
    assert_eq!(run.files[1].records, 1);
    assert_eq!(run.files[1].unmapped_fields, 0);

    let ids: Vec<_> = run.records.iter().map(|record| record.record_id.clone()).collect();
    assert_eq!(
        ids,
        vec![FieldValue::Int(1001), FieldValue::Int(1002), FieldValue::Int(2001)]
    );

    let output = dir.path().join("out.json");
    write_response(&run.records, Some(&output), true).expect("write response");
    let body: Value =
        serde_json::from_str(&fs::read_to_string(&output).expect("read output")).expect("json");

    assert_eq!(body["success"], Value::Bool(true));
    let data = body["data"].as_array().expect("data array");
    assert_eq!(data.len(), 3);
    assert_eq!(data[0]["record_id"], 1001);
    assert_eq!(data[0]["general"]["grade"], "O3");
    assert_eq!(data[0]["courses"][0]["course"], "SOS");
    assert_eq!(data[0]["courses"][0]["date"], "2010/01/01");
    assert_eq!(data[0]["unmapped"]["favorite_color"], "blue");
    assert!(data[2].get("unmapped").is_none());
}

#[test]
fn unreadable_file_is_reported_and_skipped() {
    let dir = TempDir::new().expect("temp dir");
    let good = write(dir.path(), "good.csv", "ID,grade\n1,O3\n");
    let bad = write(dir.path(), "bad.json", "{ not json");

    let run = decode_inputs(&[bad, good], &DecodeOptions::default()).expect("decode");
    assert!(run.has_errors());
    assert_eq!(run.records.len(), 1);
    let failed = &run.files[0];
    assert_eq!(failed.records, 0);
    assert!(
        failed
            .error
            .as_deref()
            .is_some_and(|message| message.contains("bad.json"))
    );
    assert!(run.files[1].error.is_none());
}

#[test]
fn empty_folder_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    assert!(decode_inputs(&[dir.path().to_path_buf()], &DecodeOptions::default()).is_err());
}

#[test]
fn config_file_sets_options_and_flags_win() {
    let dir = TempDir::new().expect("temp dir");
    let config = write(
        dir.path(),
        "roster.toml",
        "id_field = \"dod_id\"\nbinary_prepass = false\n\n[naming]\nprefix = \"_\"\n",
    );

    let loaded = load_options(Some(&config)).expect("load config");
    assert_eq!(loaded.id_field, "dod_id");
    assert_eq!(loaded.naming.key("grade"), "_grade");
    assert!(!loaded.binary_prepass);
    assert_eq!(loaded.mode, ConsumptionMode::Preserve);

    let options = apply_overrides(
        loaded,
        &OptionOverrides {
            id_field: Some("ssan".to_string()),
            consume: true,
            ..OptionOverrides::default()
        },
    );
    assert_eq!(options.id_field, "ssan");
    assert_eq!(options.mode, ConsumptionMode::Consume);
    assert_eq!(options.naming.key("grade"), "_grade");
}

#[test]
fn invalid_config_names_the_file() {
    let dir = TempDir::new().expect("temp dir");
    let config = write(dir.path(), "broken.toml", "mode = \"shred\"\n");
    let err = load_options(Some(&config)).expect_err("invalid mode");
    assert!(format!("{err:#}").contains("broken.toml"));
}

#[test]
fn prefixed_exports_decode_with_field_prefix() {
    let dir = TempDir::new().expect("temp dir");
    let input = write(dir.path(), "prefixed.csv", "ID,_grade,_course_1\n5,O2,ACSC\n");
    let options = DecodeOptions::default().with_naming(roster_model::FieldNaming::with_prefix("_"));

    let run = decode_inputs(&[input], &options).expect("decode");
    let record = &run.records[0];
    assert_eq!(
        record.general().and_then(|general| general.grade.clone()),
        Some(FieldValue::from("O2"))
    );
    assert!(record.unmapped.is_empty());
}
