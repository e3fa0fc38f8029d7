use std::collections::{BTreeMap, BTreeSet};

use roster_core::{
    DecoderRegistry, FunctionDecoder, RecordDecoder, RecordReader, SectionDecoder,
    build_default_registry, default_registry,
};
use roster_model::{
    CourseEntry, DecodeOptions, FieldNaming, FieldValue, FlatRecord, Section, SectionValue,
};

#[test]
fn default_registry_covers_every_section() {
    let registry = default_registry();
    assert_eq!(registry.len(), Section::ALL.len());
    for section in Section::ALL {
        let decoder = registry.get(section).expect("registered decoder");
        assert_eq!(decoder.section(), section);
        assert!(!decoder.description().is_empty());
    }
}

#[test]
fn decoders_produce_their_own_section() {
    let record = FlatRecord::new();
    let naming = FieldNaming::default();
    for decoder in default_registry().iter() {
        let mut reader = RecordReader::new(&record, &naming);
        assert_eq!(decoder.decode(&mut reader).section(), decoder.section());
    }
}

/// Columns a decoder looks at, including the first slot of every list.
fn columns_read_by(decoder: &dyn SectionDecoder) -> BTreeSet<String> {
    let naming = FieldNaming::default();
    let empty = FlatRecord::new();
    let mut reader = RecordReader::new(&empty, &naming);
    decoder.decode(&mut reader);
    let first_pass = reader.into_consumed();

    // Populate every column seen so that repeated groups keep going.
    let populated: FlatRecord = first_pass
        .iter()
        .map(|key| (key.clone(), FieldValue::from("X")))
        .collect();
    let mut reader = RecordReader::new(&populated, &naming);
    decoder.decode(&mut reader);
    reader.into_consumed()
}

#[test]
fn no_column_is_owned_by_two_sections() {
    let mut owners: BTreeMap<String, Section> = BTreeMap::new();
    for decoder in default_registry().iter() {
        for column in columns_read_by(decoder) {
            if let Some(previous) = owners.insert(column.clone(), decoder.section()) {
                panic!(
                    "column `{column}` read by both {previous} and {}",
                    decoder.section()
                );
            }
        }
    }
    assert!(owners.contains_key("grade"));
    assert!(owners.contains_key("course_1"));
    assert!(owners.contains_key("hist_unit_24"));
}

struct FixedCourses;

impl SectionDecoder for FixedCourses {
    fn section(&self) -> Section {
        Section::Courses
    }

    fn decode(&self, reader: &mut RecordReader<'_>) -> SectionValue {
        let course = reader.value("only_course").unwrap_or_default();
        SectionValue::Courses(vec![CourseEntry {
            course,
            date: String::new(),
        }])
    }
}

#[test]
fn custom_registry_drives_the_assembler() {
    let mut registry = DecoderRegistry::new();
    assert!(registry.is_empty());
    registry.register(Box::new(FixedCourses));
    registry.register(Box::new(FunctionDecoder::new(
        Section::Adsc,
        "No commitments",
        |_| SectionValue::Adsc(Vec::new()),
    )));

    let record: FlatRecord = [("only_course", "SOS"), ("grade", "O3")].into_iter().collect();
    let options = DecodeOptions::default();
    let decoded = RecordDecoder::with_registry(&options, &registry)
        .decode(&record, 1)
        .record;

    assert_eq!(decoded.sections.len(), 2);
    let first_course = decoded.courses().map(|courses| courses[0].course.clone());
    assert_eq!(first_course, Some(FieldValue::from("SOS")));
    assert_eq!(decoded.unmapped.keys().collect::<Vec<_>>(), vec!["grade"]);
    assert_eq!(FixedCourses.description(), "Section decoder");
}

#[test]
fn rebuilt_registry_matches_cached_one() {
    let built = build_default_registry();
    assert!(built.sections().eq(default_registry().sections()));
}
