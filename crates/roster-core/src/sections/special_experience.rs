//! Special experience section: NEI and SEI lists plus acquisition data.

use roster_model::{
    AcquisitionData, NuclearEntry, SectionValue, SeiEntry, SpecialExperienceSection,
};

use crate::group::{Anchor, Extent, GroupFamily, GroupField, extract_group};
use crate::reader::RecordReader;

const NUCLEAR_FIELDS: [GroupField; 3] = [
    GroupField::raw("nei", "nei"),
    GroupField::date("start_date", "nei_start_date"),
    GroupField::date("stop_date", "nei_stop_date"),
];

pub const NUCLEAR: GroupFamily =
    GroupFamily::new("nei", &NUCLEAR_FIELDS, Anchor::Field("nei"), Extent::UNBOUNDED);

const SEI_FIELDS: [GroupField; 1] = [GroupField::raw("sei", "sei_gen")];

pub const SPECIAL_IDENTIFIERS: GroupFamily =
    GroupFamily::new("sei_gen", &SEI_FIELDS, Anchor::Field("sei"), Extent::UNBOUNDED);

pub fn decode(reader: &mut RecordReader<'_>) -> SpecialExperienceSection {
    let nuclear = extract_group(reader, &NUCLEAR)
        .into_iter()
        .map(|entry| NuclearEntry {
            nei: entry.anchor("nei"),
            start_date: entry.date("start_date"),
            stop_date: entry.date("stop_date"),
        })
        .collect();

    let sei = extract_group(reader, &SPECIAL_IDENTIFIERS)
        .into_iter()
        .map(|entry| SeiEntry {
            sei: entry.anchor("sei"),
        })
        .collect();

    SpecialExperienceSection {
        sei_duty: reader.value("sei_duty"),
        nuclear,
        sei,
        acquisitions: AcquisitionData {
            career_level: reader.value("auth_acq_career_lvl"),
            posn_cat: reader.value("auth_acq_posn_cat"),
            posn_type: reader.value("auth_acq_posn_type"),
        },
        wic: reader.value("WIC"),
    }
}

pub(super) fn decode_value(reader: &mut RecordReader<'_>) -> SectionValue {
    SectionValue::SpecialExperience(decode(reader))
}
