//! Duty section: current duty, duty history and AFS experience.
//!
//! Both lists are fixed-slot families. A history slot exists when either its
//! unit or its location is populated; an experience slot exists when its
//! title is populated. Empty slots in between are skipped, not treated as
//! the end of the list.

use roster_model::{DutyExperienceEntry, DutyHistoryEntry, DutySection, FieldValue, SectionValue};

use crate::group::{Anchor, Extent, GroupFamily, GroupField, extract_group};
use crate::reader::RecordReader;

const HISTORY_FIELDS: [GroupField; 12] = [
    GroupField::raw("org_num", "hist_org_num"),
    GroupField::raw("org_type", "hist_org_type"),
    GroupField::raw("org_level", "hist_org_level"),
    GroupField::raw("org_det", "hist_org_det"),
    GroupField::raw("org_majcom", "hist_majcom"),
    GroupField::raw("unit", "hist_unit"),
    GroupField::raw("duty_title", "duty_hist_title"),
    GroupField::raw("dafsc", "duty_hist_dafsc"),
    GroupField::raw("location", "duty_hist_loc"),
    GroupField::raw("country_state", "duty_hist_cntryst"),
    GroupField::raw("command_level", "duty_hist_cmd_lvl"),
    GroupField::date("eff_date", "duty_hist_eff_date"),
];

pub const DUTY_HISTORY: GroupFamily = GroupFamily::new(
    "duty_history",
    &HISTORY_FIELDS,
    Anchor::AnyOf(&["unit", "location"]),
    Extent::Slots(24),
);

const EXPERIENCE_FIELDS: [GroupField; 2] = [
    GroupField::raw("duty_title", "exp_duty_afs_title"),
    GroupField::hours("duty_years", "exp_duty_calc_yrs_in_afs"),
];

pub const DUTY_EXPERIENCE: GroupFamily = GroupFamily::new(
    "duty_experience",
    &EXPERIENCE_FIELDS,
    Anchor::Field("duty_title"),
    Extent::Slots(15),
);

pub fn decode(reader: &mut RecordReader<'_>) -> DutySection {
    let history = extract_group(reader, &DUTY_HISTORY)
        .into_iter()
        .map(|entry| DutyHistoryEntry {
            // Trimmed only when populated, so an all-blank number becomes "".
            org_num: entry
                .value("org_num")
                .filter(FieldValue::is_present)
                .as_ref()
                .map(FieldValue::trimmed),
            org_type: entry.value("org_type"),
            org_level: entry.value("org_level"),
            org_det: entry.value("org_det"),
            org_majcom: entry.value("org_majcom"),
            unit: entry.value("unit"),
            duty_title: entry.value("duty_title"),
            dafsc: entry.value("dafsc"),
            location: entry.value("location"),
            country_state: entry.value("country_state"),
            command_level: entry.value("command_level"),
            eff_date: entry.date("eff_date"),
        })
        .collect();

    let experience = extract_group(reader, &DUTY_EXPERIENCE)
        .into_iter()
        .map(|entry| DutyExperienceEntry {
            duty_title: entry.anchor("duty_title"),
            duty_years: entry.hours("duty_years"),
        })
        .collect();

    DutySection {
        status: reader.value("duty_status"),
        status_ct: reader.value("duty_status_ct"),
        title: reader.value("duty_title"),
        dafsc: reader.value("afsc_duty"),
        afsc_1: reader.value("afsc_1"),
        afsc_2: reader.value("afsc_2"),
        afsc_3: reader.value("afsc_3"),
        unit: reader.value("org_unit"),
        location: reader.value("AJJ"),
        org_num: reader.value("org_num"),
        org_type: reader.value("org_type"),
        org_level: reader.value("org_level"),
        org_det: reader.value("org_det"),
        pas: reader.value("pas"),
        core_group: reader.value("core_derived_group"),
        status_expire_date: reader.date("duty_status_exp_date"),
        history,
        experience,
    }
}

pub(super) fn decode_value(reader: &mut RecordReader<'_>) -> SectionValue {
    SectionValue::Duty(decode(reader))
}
