//! Active duty service commitment section. The section value is the list itself.

use roster_model::{AdscEntry, SectionValue};

use crate::group::{Anchor, Extent, GroupFamily, GroupField, extract_group};
use crate::reader::RecordReader;

const ADSC_FIELDS: [GroupField; 2] = [
    GroupField::raw("adsc", "adsc"),
    GroupField::date("date", "adsc_date"),
];

pub const COMMITMENTS: GroupFamily =
    GroupFamily::new("adsc", &ADSC_FIELDS, Anchor::Field("adsc"), Extent::UNBOUNDED);

pub fn decode(reader: &mut RecordReader<'_>) -> Vec<AdscEntry> {
    extract_group(reader, &COMMITMENTS)
        .into_iter()
        .map(|entry| AdscEntry {
            adsc: entry.anchor("adsc"),
            date: entry.date("date"),
        })
        .collect()
}

pub(super) fn decode_value(reader: &mut RecordReader<'_>) -> SectionValue {
    SectionValue::Adsc(decode(reader))
}
