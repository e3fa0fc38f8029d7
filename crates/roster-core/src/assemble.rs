//! Record assembly: runs every section decoder over one flat record.
//!
//! Decoding itself never mutates the input. [`RecordDecoder::decode`] returns
//! the nested record together with the set of columns the decoders read;
//! [`RecordDecoder::assemble`] additionally strips those columns from the
//! caller's record when the options ask for [`ConsumptionMode::Consume`].
//! In both modes the non-null columns nobody read are reported as `unmapped`;
//! null cells are dropped by the pre-pass and never count as leftovers.

use std::collections::BTreeSet;

use roster_model::{
    ConsumptionMode, DecodeOptions, DecodedRecord, FieldValue, FlatRecord, Result,
};
use tracing::debug;

use crate::prepass;
use crate::reader::RecordReader;
use crate::sections::{DecoderRegistry, default_registry};

/// Result of a non-mutating decode.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeOutcome {
    pub record: DecodedRecord,
    /// Every column looked up while decoding, present in the row or not.
    pub consumed: BTreeSet<String>,
}

/// Decodes flat records with a fixed set of options and decoders.
#[derive(Clone, Copy)]
pub struct RecordDecoder<'r> {
    options: &'r DecodeOptions,
    registry: &'r DecoderRegistry,
}

impl<'r> RecordDecoder<'r> {
    /// Creates a decoder using the standard section decoders.
    pub fn new(options: &'r DecodeOptions) -> Self {
        Self {
            options,
            registry: default_registry(),
        }
    }

    pub fn with_registry(options: &'r DecodeOptions, registry: &'r DecoderRegistry) -> Self {
        Self { options, registry }
    }

    pub fn options(&self) -> &DecodeOptions {
        self.options
    }

    /// Decodes `record` without modifying it.
    pub fn decode(&self, record: &FlatRecord, record_id: impl Into<FieldValue>) -> DecodeOutcome {
        self.decode_inner(record, record_id.into(), None)
    }

    /// Decodes a row whose identifier is stored in the configured id column.
    ///
    /// The id column counts as consumed, so it never shows up as unmapped.
    /// A row without the column gets a null identifier.
    pub fn decode_row(&self, record: &FlatRecord) -> DecodeOutcome {
        let id_field = self.options.id_field.as_str();
        let record_id = record.get(id_field).cloned().unwrap_or_default();
        self.decode_inner(record, record_id, Some(id_field))
    }

    /// Decodes `record`, removing consumed columns in consuming mode.
    pub fn assemble(
        &self,
        record: &mut FlatRecord,
        record_id: impl Into<FieldValue>,
    ) -> DecodedRecord {
        let outcome = self.decode(record, record_id);
        self.finish(record, outcome)
    }

    /// Row variant of [`assemble`](Self::assemble).
    pub fn assemble_row(&self, record: &mut FlatRecord) -> DecodedRecord {
        let outcome = self.decode_row(record);
        self.finish(record, outcome)
    }

    /// Decodes a JSON object. Anything else is rejected as invalid input.
    pub fn decode_json(
        &self,
        value: &serde_json::Value,
        record_id: impl Into<FieldValue>,
    ) -> Result<DecodedRecord> {
        let record = FlatRecord::from_json(value)?;
        Ok(self.decode(&record, record_id).record)
    }

    fn decode_inner(
        &self,
        record: &FlatRecord,
        record_id: FieldValue,
        id_field: Option<&str>,
    ) -> DecodeOutcome {
        let prepared = prepass::prepare(record, self.options.binary_prepass);

        let mut reader = RecordReader::new(&prepared, &self.options.naming);
        let mut decoded = DecodedRecord::new(record_id);
        for decoder in self.registry.iter() {
            decoded.insert_section(decoder.decode(&mut reader));
        }

        let mut consumed = reader.into_consumed();
        if let Some(id_field) = id_field {
            consumed.insert(id_field.to_string());
        }

        decoded.unmapped = prepared
            .iter()
            .filter(|(key, _)| !consumed.contains(key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        debug!(
            sections = decoded.sections.len(),
            consumed = consumed.len(),
            unmapped = decoded.unmapped.len(),
            "decoded record"
        );

        DecodeOutcome {
            record: decoded,
            consumed,
        }
    }

    fn finish(&self, record: &mut FlatRecord, outcome: DecodeOutcome) -> DecodedRecord {
        if self.options.mode == ConsumptionMode::Consume {
            for key in &outcome.consumed {
                record.remove(key);
            }
            prepass::drop_nulls(record);
            if self.options.binary_prepass {
                prepass::normalize_binary(record);
            }
        }
        outcome.record
    }
}

/// Decodes one record with default options and the standard decoders.
pub fn decode_record(record: &FlatRecord, record_id: impl Into<FieldValue>) -> DecodedRecord {
    let options = DecodeOptions::default();
    RecordDecoder::new(&options).decode(record, record_id).record
}

#[cfg(test)]
mod tests {
    use roster_model::{FieldNaming, RosterError, Section};

    use super::*;

    fn sample() -> FlatRecord {
        [
            ("ID", FieldValue::Int(7)),
            ("grade", FieldValue::from("O3")),
            ("course_1", FieldValue::from("SOS")),
            ("favorite_color", FieldValue::from("blue")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn every_section_is_present() {
        let decoded = decode_record(&sample(), 7);
        assert_eq!(decoded.sections.keys().copied().collect::<Vec<_>>(), Section::ALL.to_vec());
    }

    #[test]
    fn preserve_mode_leaves_record_untouched() {
        let options = DecodeOptions::default();
        let mut record = sample();
        let decoded = RecordDecoder::new(&options).assemble(&mut record, 7);
        assert_eq!(record, sample());
        assert_eq!(
            decoded.unmapped.keys().collect::<Vec<_>>(),
            vec!["ID", "favorite_color"]
        );
    }

    #[test]
    fn consume_mode_strips_recognized_columns() {
        let options = DecodeOptions::default().with_mode(ConsumptionMode::Consume);
        let mut record = sample();
        let decoded = RecordDecoder::new(&options).assemble_row(&mut record);

        assert_eq!(decoded.record_id, FieldValue::Int(7));
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["favorite_color"]);
        assert_eq!(decoded.unmapped.keys().collect::<Vec<_>>(), vec!["favorite_color"]);
    }

    #[test]
    fn prefixed_naming() {
        let options = DecodeOptions::default().with_naming(FieldNaming::with_prefix("_"));
        let record: FlatRecord = [("_grade", "O3"), ("grade", "ignored")].into_iter().collect();
        let outcome = RecordDecoder::new(&options).decode(&record, 1);

        let general = outcome.record.general().expect("general section");
        assert_eq!(general.grade, Some(FieldValue::from("O3")));
        assert!(outcome.consumed.contains("_grade"));
        assert!(outcome.record.unmapped.contains_key("grade"));
    }

    #[test]
    fn binary_prepass_can_be_disabled() {
        let record: FlatRecord = [("grade", FieldValue::Bytes(b"O3".to_vec()))]
            .into_iter()
            .collect();

        let enabled = DecodeOptions::default();
        let decoded = RecordDecoder::new(&enabled).decode(&record, 1).record;
        let grade = decoded.general().and_then(|general| general.grade.clone());
        assert_eq!(grade, Some(FieldValue::from("O3")));

        let disabled = DecodeOptions::default().with_binary_prepass(false);
        let decoded = RecordDecoder::new(&disabled).decode(&record, 1).record;
        let grade = decoded.general().and_then(|general| general.grade.clone());
        assert_eq!(grade, Some(FieldValue::Bytes(b"O3".to_vec())));
    }

    #[test]
    fn json_input_must_be_an_object() {
        let options = DecodeOptions::default();
        let decoder = RecordDecoder::new(&options);
        let err = decoder
            .decode_json(&serde_json::json!(["grade", "O3"]), 1)
            .expect_err("array input");
        assert!(matches!(err, RosterError::InvalidInput(_)));

        let decoded = decoder
            .decode_json(&serde_json::json!({ "grade": "O3" }), 1)
            .expect("object input");
        assert!(decoded.general().is_some());
    }
}
