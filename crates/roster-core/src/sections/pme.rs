//! Professional military education section.

use roster_model::{PmeEntry, PmeSection, SectionValue};

use crate::group::{Anchor, Extent, GroupFamily, GroupField, extract_group};
use crate::reader::RecordReader;

const PME_FIELDS: [GroupField; 4] = [
    GroupField::raw("course", "pme"),
    GroupField::date("date", "pme_date"),
    GroupField::raw("method", "pme_method"),
    GroupField::raw("level", "pme_level"),
];

pub const PME_COURSES: GroupFamily =
    GroupFamily::new("pme", &PME_FIELDS, Anchor::Field("course"), Extent::UNBOUNDED);

pub fn decode(reader: &mut RecordReader<'_>) -> PmeSection {
    let history = extract_group(reader, &PME_COURSES)
        .into_iter()
        .map(|entry| PmeEntry {
            course: entry.anchor("course"),
            date: entry.date("date"),
            method: entry.value("method"),
            level: entry.value("level"),
        })
        .collect();

    PmeSection {
        history,
        pme_highest: reader.value("pme_highest"),
    }
}

pub(super) fn decode_value(reader: &mut RecordReader<'_>) -> SectionValue {
    SectionValue::Pme(decode(reader))
}
