//! Row pre-pass run before the section decoders.
//!
//! A null cell carries no data, so null-valued columns are dropped: an empty
//! cell in a slot past the end of a repeated group is then neither unmapped
//! nor left behind by a consuming decode.
//!
//! Some row sources also deliver text columns as raw byte buffers. When
//! enabled, every binary value is converted to UTF-8 text (invalid sequences
//! are replaced) so that lookups, trimming and presence checks see ordinary
//! strings.

use std::borrow::Cow;

use roster_model::{FieldValue, FlatRecord};

pub fn has_binary(record: &FlatRecord) -> bool {
    record
        .iter()
        .any(|(_, value)| matches!(value, FieldValue::Bytes(_)))
}

/// Text form of a binary value; `None` for every other variant.
pub fn binary_to_text(value: &FieldValue) -> Option<FieldValue> {
    match value {
        FieldValue::Bytes(bytes) => Some(FieldValue::Text(
            String::from_utf8_lossy(bytes).into_owned(),
        )),
        _ => None,
    }
}

/// Converts binary values in place and returns how many were converted.
pub fn normalize_binary(record: &mut FlatRecord) -> usize {
    let mut converted = 0;
    for value in record.values_mut() {
        if let Some(text) = binary_to_text(value) {
            *value = text;
            converted += 1;
        }
    }
    converted
}

pub fn has_null(record: &FlatRecord) -> bool {
    record.iter().any(|(_, value)| value.is_null())
}

/// Removes null-valued columns and returns how many were removed.
pub fn drop_nulls(record: &mut FlatRecord) -> usize {
    let before = record.len();
    record.retain(|_, value| !value.is_null());
    before - record.len()
}

/// Returns the record without null columns and, if `convert_binary` is set,
/// with binary values converted. Copies only when something changes.
pub fn prepare(record: &FlatRecord, convert_binary: bool) -> Cow<'_, FlatRecord> {
    let convert = convert_binary && has_binary(record);
    if !convert && !has_null(record) {
        return Cow::Borrowed(record);
    }
    let mut owned = record.clone();
    drop_nulls(&mut owned);
    if convert {
        normalize_binary(&mut owned);
    }
    Cow::Owned(owned)
}
