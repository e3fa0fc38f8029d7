//! Degree section.

use roster_model::{DegreeEntry, DegreeSection, SectionValue};

use crate::group::{Anchor, Extent, GroupFamily, GroupField, extract_group};
use crate::reader::RecordReader;

const DEGREE_FIELDS: [GroupField; 6] = [
    GroupField::raw("degree", "acad_spec"),
    GroupField::raw("degree_ct", "acad_spec_ct"),
    GroupField::raw("level", "acad_educ_level"),
    GroupField::raw("method", "acad_educ_meth"),
    GroupField::raw("school", "acad_educ_inst"),
    GroupField::date("date", "acad_educ_date"),
];

pub const DEGREES: GroupFamily = GroupFamily::new(
    "acad_spec",
    &DEGREE_FIELDS,
    Anchor::Field("degree"),
    Extent::UNBOUNDED,
);

pub fn decode(reader: &mut RecordReader<'_>) -> DegreeSection {
    let history = extract_group(reader, &DEGREES)
        .into_iter()
        .map(|entry| DegreeEntry {
            degree: entry.anchor("degree"),
            degree_ct: entry.value("degree_ct"),
            level: entry.value("level"),
            method: entry.value("method"),
            school: entry.value("school"),
            date: entry.date("date"),
        })
        .collect();

    DegreeSection {
        history,
        highest: reader.value("acad_edu_level_high"),
    }
}

pub(super) fn decode_value(reader: &mut RecordReader<'_>) -> SectionValue {
    SectionValue::Degree(decode(reader))
}
