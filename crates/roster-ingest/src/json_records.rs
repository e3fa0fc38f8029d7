use std::path::Path;

use anyhow::{Context, Result, bail};
use roster_model::FlatRecord;
use serde_json::Value;
use tracing::debug;

/// Converts parsed JSON into flat records.
///
/// Accepts a bare array of row objects or the `{ "data": [...] }` envelope
/// the personnel API answers with.
pub fn records_from_json(value: &Value) -> Result<Vec<FlatRecord>> {
    let rows = match value {
        Value::Array(rows) => rows,
        Value::Object(map) => match map.get("data") {
            Some(Value::Array(rows)) => rows,
            Some(_) => bail!("`data` must be an array of row objects"),
            None => bail!("expected an array of rows or an object with a `data` array"),
        },
        _ => bail!("expected an array of rows or an object with a `data` array"),
    };
    rows.iter()
        .enumerate()
        .map(|(idx, row)| FlatRecord::from_json(row).with_context(|| format!("row {}", idx + 1)))
        .collect()
}

pub fn read_json_records(path: &Path) -> Result<Vec<FlatRecord>> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read json: {}", path.display()))?;
    let value: Value =
        serde_json::from_str(&text).with_context(|| format!("parse json: {}", path.display()))?;
    let records =
        records_from_json(&value).with_context(|| format!("load rows: {}", path.display()))?;
    debug!(path = %path.display(), records = records.len(), "loaded json records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn bare_array_and_envelope() {
        let rows = json!([{ "ID": 1, "grade": "O3" }, { "ID": 2 }]);
        assert_eq!(records_from_json(&rows).expect("array").len(), 2);

        let envelope = json!({ "success": true, "data": [{ "ID": 1 }] });
        assert_eq!(records_from_json(&envelope).expect("envelope").len(), 1);
    }

    #[test]
    fn nested_rows_are_rejected() {
        let rows = json!([{ "ID": 1 }, { "ID": 2, "courses": [] }]);
        let err = records_from_json(&rows).expect_err("nested value");
        assert!(format!("{err:#}").contains("row 2"));
    }

    #[test]
    fn scalar_document_is_rejected() {
        assert!(records_from_json(&json!("rows")).is_err());
        assert!(records_from_json(&json!({ "data": 3 })).is_err());
    }
}
