//! Courses section. The section value is the course list itself.

use roster_model::{CourseEntry, SectionValue};

use crate::group::{Anchor, Extent, GroupFamily, GroupField, extract_group};
use crate::reader::RecordReader;

const COURSE_FIELDS: [GroupField; 2] = [
    GroupField::raw("course", "course"),
    GroupField::date("date", "course_date"),
];

pub const COURSES: GroupFamily = GroupFamily::new(
    "course",
    &COURSE_FIELDS,
    Anchor::Field("course"),
    Extent::UNBOUNDED,
);

pub fn decode(reader: &mut RecordReader<'_>) -> Vec<CourseEntry> {
    extract_group(reader, &COURSES)
        .into_iter()
        .map(|entry| CourseEntry {
            course: entry.anchor("course"),
            date: entry.date("date"),
        })
        .collect()
}

pub(super) fn decode_value(reader: &mut RecordReader<'_>) -> SectionValue {
    SectionValue::Courses(decode(reader))
}
