//! General section: identity, grade and AEF window.

use roster_model::{FieldValue, GeneralSection, SectionValue};

use crate::reader::RecordReader;

pub fn decode(reader: &mut RecordReader<'_>) -> GeneralSection {
    GeneralSection {
        first_name: reader.value("firstName"),
        last_name: reader.value("lastName"),
        proj_grade: reader.value("grade_proj"),
        grade: reader.value("grade"),
        adj_yg: reader.value("adjYG"),
        tos: reader.value("TOS"),
        tis: reader.value("TAFMS"),
        component: reader.value("component_t"),
        func_cat: reader.value("func_cat"),
        comp_cat: reader.value("comp_cat"),
        record_status: reader.value("record_status"),
        accounting_status: reader.value("accounting_status"),
        posn: reader.value("position_number"),
        aef: reader.value("aef"),
        aef_start_date: reader.date("aef_start_Date"),
        aef_stop_date: reader.date("aef_stop_Date"),
        short_tour_num: reader
            .present("short_tour_nbr")
            .map_or(FieldValue::Int(0), FieldValue::trimmed),
    }
}

pub(super) fn decode_value(reader: &mut RecordReader<'_>) -> SectionValue {
    SectionValue::General(decode(reader))
}

#[cfg(test)]
mod tests {
    use roster_model::{FieldNaming, FlatRecord};

    use super::*;

    fn general(record: &FlatRecord) -> GeneralSection {
        let naming = FieldNaming::default();
        decode(&mut RecordReader::new(record, &naming))
    }

    #[test]
    fn renames_source_columns() {
        let record: FlatRecord = [
            ("grade_proj", FieldValue::from("O4")),
            ("TAFMS", FieldValue::Int(12)),
            ("position_number", FieldValue::from("0012345")),
        ]
        .into_iter()
        .collect();
        let section = general(&record);
        assert_eq!(section.proj_grade, Some(FieldValue::from("O4")));
        assert_eq!(section.tis, Some(FieldValue::Int(12)));
        assert_eq!(section.posn, Some(FieldValue::from("0012345")));
        assert_eq!(section.grade, None);
    }

    #[test]
    fn short_tour_number_is_trimmed_or_zero() {
        let record: FlatRecord = [("short_tour_nbr", " 2 ")].into_iter().collect();
        assert_eq!(general(&record).short_tour_num, FieldValue::from("2"));

        let blank: FlatRecord = [("short_tour_nbr", "")].into_iter().collect();
        assert_eq!(general(&blank).short_tour_num, FieldValue::Int(0));
        assert_eq!(general(&FlatRecord::new()).short_tour_num, FieldValue::Int(0));
    }

    #[test]
    fn aef_window_dates() {
        let record: FlatRecord = [("aef_start_Date", 18263), ("aef_stop_Date", 0)]
            .into_iter()
            .collect();
        let section = general(&record);
        assert_eq!(section.aef_start_date, "2010/01/01");
        assert_eq!(section.aef_stop_date, "");
    }
}
