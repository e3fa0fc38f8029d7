//! Projected section: pending assignment, duty change and scheduled training.

use roster_model::{
    ProjectedAssignment, ProjectedCourse, ProjectedDuty, ProjectedSection, SectionValue,
};

use crate::group::{Anchor, Extent, GroupFamily, GroupField, extract_group};
use crate::reader::RecordReader;

const TRAINING_FIELDS: [GroupField; 4] = [
    GroupField::raw("course", "projected_training"),
    GroupField::raw("course_ct", "projected_training_ct"),
    GroupField::date("start_date", "projected_training_start_date"),
    GroupField::date("grad_date", "projected_training_grad_date"),
];

pub const PROJECTED_TRAINING: GroupFamily = GroupFamily::new(
    "projected_training",
    &TRAINING_FIELDS,
    Anchor::Field("course"),
    Extent::UNBOUNDED,
);

pub fn decode(reader: &mut RecordReader<'_>) -> ProjectedSection {
    let assignment = ProjectedAssignment {
        pas: reader.value("pas_proj"),
        afsc: reader.value("afsc_selected"),
        asd: reader.date("asd"),
        pdd: reader.date("pdd"),
        rnltd: reader.date("rnltd"),
    };

    let duty = ProjectedDuty {
        eff_date: reader.date("duty_status_proj_eff_date"),
        exp_date: reader.date("duty_status_proj_exp_date"),
        status: reader.value("duty_status_proj"),
        title_pending: reader.value("duty_title_pending"),
        cmd_lvl_pending: reader.value("cmd_lvl_pending"),
        afsc_pending: reader.value("dafsc_pending"),
        eff_date_pending: reader.date("duty_eff_date_pending"),
    };

    let course = extract_group(reader, &PROJECTED_TRAINING)
        .into_iter()
        .map(|entry| ProjectedCourse {
            course: entry.anchor("course"),
            course_ct: entry.value("course_ct"),
            start_date: entry.date("start_date"),
            grad_date: entry.date("grad_date"),
        })
        .collect();

    ProjectedSection {
        assignment,
        course,
        duty,
    }
}

pub(super) fn decode_value(reader: &mut RecordReader<'_>) -> SectionValue {
    SectionValue::Projected(decode(reader))
}
