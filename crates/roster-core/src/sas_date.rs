//! Epoch-count date codec.
//!
//! The statistical export stores dates as whole-day counts from 1960-01-01
//! (day 0) and timestamps as whole-second counts from the same instant.
//! Decoding produces display strings for the personnel API.
//!
//! # Conventions
//!
//! - Dates render as `YYYY/MM/DD`, timestamps as `YYYY/MM/DD HH:MM:SS`
//! - A missing, null, zero, negative, fractional or non-numeric count decodes
//!   to `""`; an empty string is the "no date" sentinel, never an error
//! - Arithmetic is timezone-naive: one day is exactly 86,400 seconds

use chrono::{Days, NaiveDate, NaiveDateTime, TimeDelta};
use roster_model::FieldValue;

/// Day 0 of the export's date encoding.
pub const SAS_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1960, 1, 1) {
    Some(date) => date,
    None => panic!("1960-01-01 is a valid date"),
};

const DATE_FORMAT: &str = "%Y/%m/%d";
const DATETIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Unit of an epoch count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpochUnit {
    /// Whole days since the epoch (date-valued columns).
    Days,
    /// Whole seconds since the epoch (timestamp-valued columns).
    Seconds,
}

/// Extracts a usable epoch count: a positive whole number.
pub fn epoch_count(raw: Option<&FieldValue>) -> Option<i64> {
    let count = raw?.as_i64()?;
    (count > 0).then_some(count)
}

/// Converts a day count to a calendar date.
pub fn sas_date(raw: Option<&FieldValue>) -> Option<NaiveDate> {
    let days = u64::try_from(epoch_count(raw)?).ok()?;
    SAS_EPOCH.checked_add_days(Days::new(days))
}

/// Converts a second count to a timestamp.
pub fn sas_datetime(raw: Option<&FieldValue>) -> Option<NaiveDateTime> {
    let seconds = epoch_count(raw)?;
    let midnight = SAS_EPOCH.and_hms_opt(0, 0, 0)?;
    midnight.checked_add_signed(TimeDelta::try_seconds(seconds)?)
}

/// Decodes a day count to `YYYY/MM/DD`, or `""` when there is no date.
pub fn decode_date(raw: Option<&FieldValue>) -> String {
    sas_date(raw)
        .map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Decodes a second count to `YYYY/MM/DD HH:MM:SS`, or `""` when there is no timestamp.
pub fn decode_datetime(raw: Option<&FieldValue>) -> String {
    sas_datetime(raw)
        .map(|datetime| datetime.format(DATETIME_FORMAT).to_string())
        .unwrap_or_default()
}

/// Decodes a count in the given unit.
pub fn decode(raw: Option<&FieldValue>, unit: EpochUnit) -> String {
    match unit {
        EpochUnit::Days => decode_date(raw),
        EpochUnit::Seconds => decode_datetime(raw),
    }
}

/// Decodes a raw day count.
pub fn format_sas_date(days: i64) -> String {
    decode_date(Some(&FieldValue::Int(days)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_first_of_january_1960() {
        assert_eq!(SAS_EPOCH.to_string(), "1960-01-01");
    }

    #[test]
    fn sentinel_inputs_decode_empty() {
        assert_eq!(decode_date(None), "");
        assert_eq!(decode_date(Some(&FieldValue::Null)), "");
        assert_eq!(format_sas_date(0), "");
        assert_eq!(format_sas_date(-5), "");
    }

    #[test]
    fn first_day_after_epoch() {
        assert_eq!(format_sas_date(1), "1960/01/02");
    }

    #[test]
    fn seconds_unit() {
        let raw = FieldValue::Int(86_400 + 3_661);
        assert_eq!(decode(Some(&raw), EpochUnit::Seconds), "1960/01/02 01:01:01");
    }
}
