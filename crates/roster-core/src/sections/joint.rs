//! Joint duty section.
//!
//! Joint assignments are anchored on their start date, so a zero or blank
//! start date ends the list.

use roster_model::{JointEntry, JointSection, SectionValue};

use crate::group::{Anchor, Extent, GroupFamily, GroupField, extract_group};
use crate::reader::RecordReader;

const JOINT_FIELDS: [GroupField; 6] = [
    GroupField::date("start_date", "jda_start_date"),
    GroupField::date("stop_date", "jda_stop_date"),
    GroupField::raw("type", "jda_tour_type"),
    GroupField::raw("credit", "jda_tour_credit"),
    GroupField::raw("reason", "jda_completion_rsn"),
    GroupField::raw("posn", "jdamis_posn_number"),
];

pub const JOINT_ASSIGNMENTS: GroupFamily = GroupFamily::new(
    "jda",
    &JOINT_FIELDS,
    Anchor::Field("start_date"),
    Extent::UNBOUNDED,
);

pub fn decode(reader: &mut RecordReader<'_>) -> JointSection {
    let history = extract_group(reader, &JOINT_ASSIGNMENTS)
        .into_iter()
        .map(|entry| JointEntry {
            start_date: entry.date("start_date"),
            stop_date: entry.date("stop_date"),
            tour_type: entry.value("type"),
            credit: entry.value("credit"),
            reason: entry.value("reason"),
            posn: entry.value("posn"),
        })
        .collect();

    JointSection {
        history,
        jso_code: reader.value("jso_spec_code"),
        jda_flag: reader.value("jda_flag"),
        jso_jsonum_status: reader.value("jso_jsonum_status"),
    }
}

pub(super) fn decode_value(reader: &mut RecordReader<'_>) -> SectionValue {
    SectionValue::Joint(decode(reader))
}

#[cfg(test)]
mod tests {
    use roster_model::{FieldNaming, FieldValue, FlatRecord};

    use super::*;

    #[test]
    fn anchored_on_start_date() {
        let record: FlatRecord = [
            ("jda_start_date_1", FieldValue::Int(18263)),
            ("jda_tour_type_1", FieldValue::from("S")),
            ("jda_start_date_2", FieldValue::Int(0)),
            ("jda_tour_type_2", FieldValue::from("L")),
            ("jso_spec_code", FieldValue::from("3")),
        ]
        .into_iter()
        .collect();
        let naming = FieldNaming::default();
        let section = decode(&mut RecordReader::new(&record, &naming));

        assert_eq!(section.history.len(), 1);
        assert_eq!(section.history[0].start_date, "2010/01/01");
        assert_eq!(section.history[0].tour_type, Some(FieldValue::from("S")));
        assert_eq!(section.jso_code, Some(FieldValue::from("3")));

        let json = serde_json::to_value(&section.history[0]).expect("serialize entry");
        assert_eq!(json["type"], "S");
    }
}
