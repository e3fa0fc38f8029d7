//! Numeric coercions used by section decoders.

use roster_model::FieldValue;

/// Coerces a field to a number. Missing, null and unparseable values become NaN.
pub fn to_number(value: Option<&FieldValue>) -> f64 {
    value.and_then(FieldValue::as_f64).unwrap_or(f64::NAN)
}

/// Rounds to one decimal place, ties away from zero (`7.25` -> `7.3`).
///
/// NaN stays NaN.
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Coerces and rounds an hour (or year) count.
pub fn hours(value: Option<&FieldValue>) -> f64 {
    round_tenths(to_number(value))
}
