//! Assignment codes section: block, availability and limitation codes.
//!
//! Each code family is anchored on its date column. Exports are known to
//! leave stray values in unused slots, so every family is consumed through
//! slot 10 even when its list ends earlier.

use roster_model::{AssignmentCodesSection, CodeEntry, SectionValue};

use crate::group::{Anchor, Extent, GroupFamily, GroupField, extract_group};
use crate::reader::RecordReader;

/// Last slot consumed for every code family.
pub const CODE_SLOT_CAP: u32 = 10;

const CODE_EXTENT: Extent = Extent::UntilGap {
    clear_through: Some(CODE_SLOT_CAP),
};

const BLOCK_FIELDS: [GroupField; 2] = [
    GroupField::date("date", "abc_date"),
    GroupField::raw("code", "abc"),
];

const AVAIL_FIELDS: [GroupField; 2] = [
    GroupField::date("date", "aac_date"),
    GroupField::raw("code", "aac"),
];

const LIMIT_FIELDS: [GroupField; 2] = [
    GroupField::date("date", "alc_date"),
    GroupField::raw("code", "alc"),
];

pub const BLOCK_CODES: GroupFamily =
    GroupFamily::new("abc", &BLOCK_FIELDS, Anchor::Field("date"), CODE_EXTENT);

pub const AVAIL_CODES: GroupFamily =
    GroupFamily::new("aac", &AVAIL_FIELDS, Anchor::Field("date"), CODE_EXTENT);

pub const LIMIT_CODES: GroupFamily =
    GroupFamily::new("alc", &LIMIT_FIELDS, Anchor::Field("date"), CODE_EXTENT);

fn codes(reader: &mut RecordReader<'_>, family: &GroupFamily) -> Vec<CodeEntry> {
    extract_group(reader, family)
        .into_iter()
        .map(|entry| CodeEntry {
            date: entry.date("date"),
            code: entry.value("code"),
        })
        .collect()
}

pub fn decode(reader: &mut RecordReader<'_>) -> AssignmentCodesSection {
    AssignmentCodesSection {
        block_code: codes(reader, &BLOCK_CODES),
        avail_code: codes(reader, &AVAIL_CODES),
        limit_code: codes(reader, &LIMIT_CODES),
    }
}

pub(super) fn decode_value(reader: &mut RecordReader<'_>) -> SectionValue {
    SectionValue::AsgnCode(decode(reader))
}
