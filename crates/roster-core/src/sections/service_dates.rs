//! Service dates section.

use roster_model::{SectionValue, ServiceDatesSection};

use crate::reader::RecordReader;

/// Source columns of the section, in output order. Each keeps its name.
pub const SERVICE_DATE_FIELDS: [&str; 16] = [
    "das",
    "ddlds",
    "duty_status_eff_date",
    "odsd",
    "strd",
    "dos",
    "ead",
    "pay_date",
    "tafcsd",
    "tfcsd",
    "grade_eff_date",
    "dor",
    "tafmsd",
    "deros",
    "cc_date",
    "retsep_eff_date_proj",
];

pub fn decode(reader: &mut RecordReader<'_>) -> ServiceDatesSection {
    let [
        das,
        ddlds,
        duty_status_eff_date,
        odsd,
        strd,
        dos,
        ead,
        pay_date,
        tafcsd,
        tfcsd,
        grade_eff_date,
        dor,
        tafmsd,
        deros,
        cc_date,
        retsep_eff_date_proj,
    ] = SERVICE_DATE_FIELDS.map(|field| reader.date(field));

    ServiceDatesSection {
        das,
        ddlds,
        duty_status_eff_date,
        odsd,
        strd,
        dos,
        ead,
        pay_date,
        tafcsd,
        tfcsd,
        grade_eff_date,
        dor,
        tafmsd,
        deros,
        cc_date,
        retsep_eff_date_proj,
    }
}

pub(super) fn decode_value(reader: &mut RecordReader<'_>) -> SectionValue {
    SectionValue::ServiceDates(decode(reader))
}
