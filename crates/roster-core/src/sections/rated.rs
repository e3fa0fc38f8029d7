//! Rated section: aviation status and aircraft history.

use roster_model::{AircraftEntry, RatedSection, SectionValue};

use crate::group::{Anchor, Extent, GroupFamily, GroupField, extract_group};
use crate::reader::RecordReader;

const AIRCRAFT_FIELDS: [GroupField; 3] = [
    GroupField::raw("aircraft", "acft_hist"),
    GroupField::date("date_flown", "acft_hist_date_flown"),
    GroupField::hours("hours", "acft_hist_hrs"),
];

pub const AIRCRAFT_HISTORY: GroupFamily = GroupFamily::new(
    "acft_hist",
    &AIRCRAFT_FIELDS,
    Anchor::Field("aircraft"),
    Extent::UNBOUNDED,
);

pub fn decode(reader: &mut RecordReader<'_>) -> RatedSection {
    let mut section = RatedSection {
        aero_rating: reader.value("aero_rating"),
        aero_rating_ct: reader.value("aero_rating_ct"),
        flt_activity_code: reader.value("flt_activity_code"),
        gates_curr: reader.value("gates_curr"),
        flt_hrs_combat: reader.value("flt_hrs_combat"),
        flt_hrs_instr: reader.value("flt_hrs_instr"),
        flt_hrs_total: reader.value("flt_hrs_total"),
        avn_service_code: reader.value("avn_service_code"),
        avn_service_code_ct: reader.value("avn_service_code_ct"),
        rdtm: reader.value("rdtm"),
        aircrew_position_id: reader.value("aircrew_position_id"),
        acp_status: reader.value("acp_status"),
        acp_status_ct: reader.value("acp_status_ct"),
        avn_service_date: reader.date("avn_service_date"),
        acp_elig_date: reader.date("acp_elig_date"),
        acp_effective_date: reader.date("acp_effective_date"),
        acp_stop_date: reader.date("acp_stop_date"),
        aero_rating_date: reader.date("aero_rating_date"),
        return_to_fly_date: reader.date("return_to_fly_date"),
        aircraft_history: Vec::new(),
    };
    section.aircraft_history = extract_group(reader, &AIRCRAFT_HISTORY)
        .into_iter()
        .map(|entry| AircraftEntry {
            aircraft: entry.anchor("aircraft"),
            aircraft_date_flown: entry.date("date_flown"),
            hours: entry.hours("hours"),
        })
        .collect();
    section
}

pub(super) fn decode_value(reader: &mut RecordReader<'_>) -> SectionValue {
    SectionValue::Rated(decode(reader))
}

#[cfg(test)]
mod tests {
    use roster_model::{FieldNaming, FieldValue, FlatRecord};

    use super::*;

    #[test]
    fn aircraft_hours_are_rounded() {
        let record: FlatRecord = [
            ("aero_rating", FieldValue::from("PILOT")),
            ("acft_hist_1", FieldValue::from("F015E")),
            ("acft_hist_hrs_1", FieldValue::Float(1234.56)),
            ("acft_hist_date_flown_1", FieldValue::Int(18263)),
            ("acft_hist_2", FieldValue::from("T038C")),
            ("acft_hist_hrs_2", FieldValue::from("12.25")),
        ]
        .into_iter()
        .collect();
        let naming = FieldNaming::default();
        let section = decode(&mut RecordReader::new(&record, &naming));

        assert_eq!(section.aero_rating, Some(FieldValue::from("PILOT")));
        assert_eq!(section.aircraft_history.len(), 2);
        assert_eq!(section.aircraft_history[0].hours, 1234.6);
        assert_eq!(section.aircraft_history[0].aircraft_date_flown, "2010/01/01");
        assert_eq!(section.aircraft_history[1].hours, 12.3);
        assert_eq!(section.aircraft_history[1].aircraft_date_flown, "");
    }
}
