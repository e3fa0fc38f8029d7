use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use roster_model::{FieldValue, FlatRecord};
use tracing::{debug, warn};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Types one CSV cell.
///
/// Empty cells are null. Whole numbers become integers and other finite
/// numbers floats, except codes with leading zeros (`0012345`), which stay
/// text. Text is kept verbatim: padding in fixed-width columns is meaningful
/// to the decoders that trim it.
pub fn parse_cell(raw: &str) -> FieldValue {
    if raw.is_empty() {
        return FieldValue::Null;
    }
    if has_leading_zero(raw) {
        return FieldValue::Text(raw.to_string());
    }
    if let Ok(int) = raw.parse::<i64>() {
        return FieldValue::Int(int);
    }
    match raw.parse::<f64>() {
        Ok(float) if float.is_finite() && raw.bytes().any(|b| b.is_ascii_digit()) => {
            FieldValue::Float(float)
        }
        _ => FieldValue::Text(raw.to_string()),
    }
}

fn has_leading_zero(raw: &str) -> bool {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    let bytes = digits.as_bytes();
    bytes.len() > 1 && bytes[0] == b'0' && bytes[1].is_ascii_digit()
}

/// Reads a CSV export with a header row into flat records.
///
/// Rows shorter than the header get nulls for the missing columns; blank
/// rows are skipped.
pub fn read_csv_records(path: &Path) -> Result<Vec<FlatRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("read csv header: {}", path.display()))?
        .iter()
        .map(normalize_header)
        .collect();
    for (idx, header) in headers.iter().enumerate() {
        if headers[..idx].contains(header) {
            warn!(path = %path.display(), column = %header, "duplicate column; last value wins");
        }
    }

    let mut records = Vec::new();
    for (row_idx, row) in reader.records().enumerate() {
        let row = row.with_context(|| format!("read record {}: {}", row_idx + 1, path.display()))?;
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let record: FlatRecord = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| (header.clone(), parse_cell(row.get(idx).unwrap_or(""))))
            .collect();
        records.push(record);
    }

    debug!(
        path = %path.display(),
        columns = headers.len(),
        records = records.len(),
        "loaded csv records"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_typed() {
        assert_eq!(parse_cell(""), FieldValue::Null);
        assert_eq!(parse_cell("18262"), FieldValue::Int(18262));
        assert_eq!(parse_cell("-3"), FieldValue::Int(-3));
        assert_eq!(parse_cell("7.25"), FieldValue::Float(7.25));
        assert_eq!(parse_cell(" 2 "), FieldValue::from(" 2 "));
        assert_eq!(parse_cell("O3"), FieldValue::from("O3"));
    }

    #[test]
    fn codes_keep_leading_zeros() {
        assert_eq!(parse_cell("0012345"), FieldValue::from("0012345"));
        assert_eq!(parse_cell("0"), FieldValue::Int(0));
        assert_eq!(parse_cell("0.5"), FieldValue::Float(0.5));
    }

    #[test]
    fn non_finite_words_stay_text() {
        assert_eq!(parse_cell("inf"), FieldValue::from("inf"));
        assert_eq!(parse_cell("NaN"), FieldValue::from("NaN"));
    }

    #[test]
    fn header_bom_is_stripped() {
        assert_eq!(normalize_header("\u{feff}ID"), "ID");
        assert_eq!(normalize_header(" grade "), "grade");
    }
}
