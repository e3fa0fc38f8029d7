//! Scalar cell values carried by flat export rows.

use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{Result, RosterError};

/// A single scalar cell from a statistical export row.
///
/// Exports are weakly typed: the same column may arrive as an integer in one
/// row and as text in another, so values keep whatever shape the row-fetch
/// collaborator produced. `Bytes` holds binary-typed columns until the
/// binary pre-pass converts them to text.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FieldValue {
    #[default]
    Null,
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
}

impl FieldValue {
    /// Returns whether the value counts as populated.
    ///
    /// Null, blank text, numeric zero and NaN are all treated as "no value";
    /// exports write empty cells and zero day counts for missing entries.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Int(v) => *v != 0,
            Self::Float(v) => *v != 0.0 && !v.is_nan(),
            Self::Text(v) => !v.is_empty(),
            Self::Bytes(v) => !v.is_empty(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrows the textual form of the value, if it has one.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Null => None,
            Self::Int(v) => Some(Cow::Owned(v.to_string())),
            Self::Float(v) => Some(Cow::Owned(v.to_string())),
            Self::Text(v) => Some(Cow::Borrowed(v.as_str())),
            Self::Bytes(v) => Some(String::from_utf8_lossy(v)),
        }
    }

    /// Numeric view of the value. Text is parsed after trimming.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Null => None,
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Text(_) | Self::Bytes(_) => {
                let text = self.as_text()?;
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    trimmed.parse::<f64>().ok()
                }
            }
        }
    }

    /// Integer view of the value. Floats only convert when they are integral.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Null => None,
            Self::Int(v) => Some(*v),
            Self::Float(v) => integral(*v),
            Self::Text(_) | Self::Bytes(_) => {
                let text = self.as_text()?;
                let trimmed = text.trim();
                trimmed
                    .parse::<i64>()
                    .ok()
                    .or_else(|| trimmed.parse::<f64>().ok().and_then(integral))
            }
        }
    }

    /// Strips surrounding whitespace from fixed-width text columns.
    ///
    /// Numeric values pass through unchanged.
    pub fn trimmed(&self) -> FieldValue {
        match self {
            Self::Text(v) => Self::Text(v.trim().to_string()),
            Self::Bytes(v) => Self::Text(String::from_utf8_lossy(v).trim().to_string()),
            other => other.clone(),
        }
    }

    /// Converts a JSON scalar into a field value.
    ///
    /// Arrays and objects are not scalars and are rejected.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        use serde_json::Value;
        match value {
            Value::Null => Ok(Self::Null),
            Value::Bool(flag) => Ok(Self::Int(i64::from(*flag))),
            Value::Number(number) => Ok(match number.as_i64() {
                Some(v) => Self::Int(v),
                None => Self::Float(number.as_f64().unwrap_or(f64::NAN)),
            }),
            Value::String(text) => Ok(Self::Text(text.clone())),
            Value::Array(_) => Err(RosterError::InvalidInput(
                "expected a scalar value, found an array".to_string(),
            )),
            Value::Object(_) => Err(RosterError::InvalidInput(
                "expected a scalar value, found an object".to_string(),
            )),
        }
    }
}

fn integral(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_none(),
            Self::Int(v) => serializer.serialize_i64(*v),
            Self::Float(v) => serializer.serialize_f64(*v),
            Self::Text(v) => serializer.serialize_str(v),
            Self::Bytes(v) => serializer.serialize_str(&String::from_utf8_lossy(v)),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_text() {
            Some(text) => f.write_str(&text),
            None => Ok(()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presence_follows_export_conventions() {
        assert!(!FieldValue::Null.is_present());
        assert!(!FieldValue::from("").is_present());
        assert!(!FieldValue::Int(0).is_present());
        assert!(!FieldValue::Float(f64::NAN).is_present());
        assert!(FieldValue::from(" ").is_present());
        assert!(FieldValue::Int(-3).is_present());
        assert!(FieldValue::from("SOS").is_present());
    }

    #[test]
    fn numeric_views() {
        assert_eq!(FieldValue::from(" 7.25 ").as_f64(), Some(7.25));
        assert_eq!(FieldValue::from("abc").as_f64(), None);
        assert_eq!(FieldValue::Float(18262.0).as_i64(), Some(18262));
        assert_eq!(FieldValue::Float(18262.5).as_i64(), None);
        assert_eq!(FieldValue::from("18262").as_i64(), Some(18262));
    }

    #[test]
    fn bytes_serialize_as_text() {
        let value = FieldValue::Bytes(b"B-52".to_vec());
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"B-52\"");
    }

    #[test]
    fn nan_serializes_as_null() {
        let value = FieldValue::Float(f64::NAN);
        assert_eq!(serde_json::to_string(&value).unwrap(), "null");
    }

    #[test]
    fn json_containers_are_rejected() {
        let err = FieldValue::from_json(&serde_json::json!([1, 2])).unwrap_err();
        assert!(matches!(err, RosterError::InvalidInput(_)));
    }
}
