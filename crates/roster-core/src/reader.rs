//! Field lookups with consumption tracking.
//!
//! Section decoders never touch a [`FlatRecord`] directly. They read through
//! a [`RecordReader`], which resolves base names against the configured
//! [`FieldNaming`] and remembers every column it was asked for. The set of
//! consumed columns is handed back to the assembler, which decides whether
//! to strip them from the caller's record.

use std::collections::BTreeSet;

use roster_model::{FieldNaming, FieldValue, FlatRecord};

use crate::numeric;
use crate::sas_date;

pub struct RecordReader<'a> {
    record: &'a FlatRecord,
    naming: &'a FieldNaming,
    consumed: BTreeSet<String>,
}

impl<'a> RecordReader<'a> {
    pub fn new(record: &'a FlatRecord, naming: &'a FieldNaming) -> Self {
        Self {
            record,
            naming,
            consumed: BTreeSet::new(),
        }
    }

    pub fn naming(&self) -> &FieldNaming {
        self.naming
    }

    fn lookup(&mut self, key: String) -> Option<&'a FieldValue> {
        let value = self.record.get(&key).filter(|value| !value.is_null());
        self.consumed.insert(key);
        value
    }

    /// Raw value of a scalar field; `None` when missing or null.
    pub fn raw(&mut self, base: &str) -> Option<&'a FieldValue> {
        let key = self.naming.key(base);
        self.lookup(key)
    }

    /// Owned copy of a scalar field.
    pub fn value(&mut self, base: &str) -> Option<FieldValue> {
        self.raw(base).cloned()
    }

    /// Scalar field that passes the presence rule (not blank, not zero).
    pub fn present(&mut self, base: &str) -> Option<&'a FieldValue> {
        self.raw(base).filter(|value| value.is_present())
    }

    /// Day-count field decoded to `YYYY/MM/DD`, or `""`.
    pub fn date(&mut self, base: &str) -> String {
        sas_date::decode_date(self.raw(base))
    }

    /// Numeric coercion of a scalar field (NaN when absent or unparseable).
    pub fn number(&mut self, base: &str) -> f64 {
        numeric::to_number(self.raw(base))
    }

    /// Raw value of slot `index` of an indexed field.
    pub fn slot(&mut self, stem: &str, index: u32) -> Option<&'a FieldValue> {
        let key = self.naming.indexed_key(stem, index);
        self.lookup(key)
    }

    /// Marks a slot as consumed without interpreting it.
    ///
    /// Returns whether the slot held a populated value.
    pub fn clear_slot(&mut self, stem: &str, index: u32) -> bool {
        self.slot(stem, index).is_some_and(FieldValue::is_present)
    }

    pub fn is_consumed(&self, key: &str) -> bool {
        self.consumed.contains(key)
    }

    pub fn consumed(&self) -> &BTreeSet<String> {
        &self.consumed
    }

    pub fn into_consumed(self) -> BTreeSet<String> {
        self.consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_are_recorded_even_when_missing() {
        let record: FlatRecord = [("grade", "O3")].into_iter().collect();
        let naming = FieldNaming::default();
        let mut reader = RecordReader::new(&record, &naming);

        assert_eq!(reader.value("grade"), Some(FieldValue::from("O3")));
        assert_eq!(reader.value("grade_proj"), None);
        assert!(reader.is_consumed("grade"));
        assert!(reader.is_consumed("grade_proj"));
        assert_eq!(reader.consumed().len(), 2);
    }

    #[test]
    fn prefix_is_applied() {
        let record: FlatRecord = [("_course_1", "SOS")].into_iter().collect();
        let naming = FieldNaming::with_prefix("_");
        let mut reader = RecordReader::new(&record, &naming);

        assert_eq!(reader.slot("course", 1), Some(&FieldValue::from("SOS")));
        assert!(reader.is_consumed("_course_1"));
    }

    #[test]
    fn null_reads_as_missing() {
        let record: FlatRecord = [("grade", FieldValue::Null)].into_iter().collect();
        let naming = FieldNaming::default();
        let mut reader = RecordReader::new(&record, &naming);
        assert_eq!(reader.raw("grade"), None);
    }
}
