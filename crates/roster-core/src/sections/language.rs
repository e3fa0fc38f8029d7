//! Language section: up to five tested languages and the DLAB result.

use roster_model::{LanguageEntry, LanguageSection, SectionValue};

use crate::group::{Anchor, Extent, GroupFamily, GroupField, extract_group};
use crate::reader::RecordReader;

const LANGUAGE_FIELDS: [GroupField; 4] = [
    GroupField::raw("id", "lang_id"),
    GroupField::raw("listen", "lang_listen_comp"),
    GroupField::raw("read", "lang_read_comp"),
    GroupField::date("date", "lang_test_date"),
];

pub const LANGUAGES: GroupFamily = GroupFamily::new(
    "lang",
    &LANGUAGE_FIELDS,
    Anchor::Field("id"),
    Extent::Slots(5),
);

pub fn decode(reader: &mut RecordReader<'_>) -> LanguageSection {
    let list = extract_group(reader, &LANGUAGES)
        .into_iter()
        .map(|entry| LanguageEntry {
            id: entry.anchor("id"),
            listen: entry.value("listen"),
            read: entry.value("read"),
            date: entry.date("date"),
        })
        .collect();

    LanguageSection {
        list,
        dlab_score: reader.number("lang_dlab_score"),
        dlab_date: reader.date("lang_dlab_date"),
    }
}

pub(super) fn decode_value(reader: &mut RecordReader<'_>) -> SectionValue {
    SectionValue::Language(decode(reader))
}

#[cfg(test)]
mod tests {
    use roster_model::{FieldNaming, FieldValue, FlatRecord};

    use super::*;

    fn language(record: &FlatRecord) -> LanguageSection {
        let naming = FieldNaming::default();
        decode(&mut RecordReader::new(record, &naming))
    }

    #[test]
    fn fixed_slots_skip_missing_ids() {
        let record: FlatRecord = [
            ("lang_id_2", FieldValue::from("GM")),
            ("lang_listen_comp_2", FieldValue::from("2+")),
            ("lang_id_5", FieldValue::from("FR")),
            ("lang_id_6", FieldValue::from("ignored")),
            ("lang_dlab_score", FieldValue::from("112")),
        ]
        .into_iter()
        .collect();
        let section = language(&record);

        let ids: Vec<_> = section.list.iter().map(|entry| entry.id.clone()).collect();
        assert_eq!(ids, vec![FieldValue::from("GM"), FieldValue::from("FR")]);
        assert_eq!(section.list[0].listen, Some(FieldValue::from("2+")));
        assert_eq!(section.dlab_score, 112.0);
        assert_eq!(section.dlab_date, "");
    }

    #[test]
    fn missing_dlab_score_serializes_as_null() {
        let section = language(&FlatRecord::new());
        assert!(section.dlab_score.is_nan());
        let json = serde_json::to_value(&section).expect("serialize section");
        assert!(json["dlab_score"].is_null());
    }
}
