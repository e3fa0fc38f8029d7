//! Repeated-group families and their extractor.
//!
//! Export rows flatten variable-length lists into numbered columns:
//! `course_1`, `course_date_1`, `course_2`, `course_date_2`, ... A
//! [`GroupFamily`] describes one such list as a table of roles, each bound
//! to a column stem and a value transform. The concrete column for slot `i`
//! is always `<prefix><stem>_<i>`, so templates cannot drift between
//! decoders.
//!
//! # Termination
//!
//! Unbounded families ([`Extent::UntilGap`]) start at slot 1 and stop at the
//! first slot whose anchor is absent. A hole hides every later slot even if
//! it is populated. Fixed-slot families ([`Extent::Slots`]) examine every
//! slot and drop those without an anchor.
//!
//! Family definitions are validated by `const fn` constructors: a malformed
//! stem or an anchor naming an unknown role fails the build.

use roster_model::FieldValue;
use tracing::{trace, warn};

use crate::numeric;
use crate::reader::RecordReader;
use crate::sas_date;

/// Transform applied to a slot value when an entry is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Passed through as-is.
    Raw,
    /// Day count decoded to `YYYY/MM/DD` (or `""`).
    Date,
    /// Fixed-width text with surrounding whitespace removed.
    Trimmed,
    /// Numeric count rounded to one decimal place.
    Hours,
}

/// One role of a family, bound to a column stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupField {
    pub role: &'static str,
    pub stem: &'static str,
    pub kind: FieldKind,
}

impl GroupField {
    pub const fn new(role: &'static str, stem: &'static str, kind: FieldKind) -> Self {
        assert!(valid_stem(stem), "column stem must be [A-Za-z0-9_]+ without a trailing '_'");
        Self { role, stem, kind }
    }

    pub const fn raw(role: &'static str, stem: &'static str) -> Self {
        Self::new(role, stem, FieldKind::Raw)
    }

    pub const fn date(role: &'static str, stem: &'static str) -> Self {
        Self::new(role, stem, FieldKind::Date)
    }

    pub const fn trimmed(role: &'static str, stem: &'static str) -> Self {
        Self::new(role, stem, FieldKind::Trimmed)
    }

    pub const fn hours(role: &'static str, stem: &'static str) -> Self {
        Self::new(role, stem, FieldKind::Hours)
    }
}

/// Which role(s) decide whether a slot exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Field(&'static str),
    /// The slot exists when any of the roles is present.
    AnyOf(&'static [&'static str]),
}

/// How far a family extends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    /// Read until the first absent anchor.
    ///
    /// With `clear_through`, slots after the end up to that index are still
    /// consumed: some exports leave stray values in unused slots.
    UntilGap { clear_through: Option<u32> },
    /// Exactly this many slots; slots without an anchor are skipped.
    Slots(u32),
}

impl Extent {
    pub const UNBOUNDED: Extent = Extent::UntilGap {
        clear_through: None,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupFamily {
    pub name: &'static str,
    pub fields: &'static [GroupField],
    pub anchor: Anchor,
    pub extent: Extent,
}

impl GroupFamily {
    pub const fn new(
        name: &'static str,
        fields: &'static [GroupField],
        anchor: Anchor,
        extent: Extent,
    ) -> Self {
        assert!(!fields.is_empty(), "family needs at least one field");
        match anchor {
            Anchor::Field(role) => {
                assert!(has_role(fields, role), "anchor role is not a family field");
            }
            Anchor::AnyOf(roles) => {
                assert!(!roles.is_empty(), "anchor needs at least one role");
                let mut idx = 0;
                while idx < roles.len() {
                    assert!(has_role(fields, roles[idx]), "anchor role is not a family field");
                    idx += 1;
                }
            }
        }
        Self {
            name,
            fields,
            anchor,
            extent,
        }
    }

    pub fn field(&self, role: &str) -> Option<&GroupField> {
        self.fields.iter().find(|field| field.role == role)
    }

    fn anchor_present(&self, reader: &mut RecordReader<'_>, index: u32) -> bool {
        match self.anchor {
            Anchor::Field(role) => self.role_present(reader, role, index),
            // Every alternative is looked at so all of them count as consumed.
            Anchor::AnyOf(roles) => roles
                .iter()
                .fold(false, |found, role| self.role_present(reader, role, index) || found),
        }
    }

    fn role_present(&self, reader: &mut RecordReader<'_>, role: &str, index: u32) -> bool {
        self.field(role).is_some_and(|field| {
            reader
                .slot(field.stem, index)
                .is_some_and(FieldValue::is_present)
        })
    }
}

/// Decoded value of one role within an entry.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryValue {
    Value(Option<FieldValue>),
    Date(String),
    Hours(f64),
}

/// One slot of a repeated group, with transforms applied.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupEntry {
    pub index: u32,
    values: Vec<(&'static str, EntryValue)>,
}

impl GroupEntry {
    pub fn get(&self, role: &str) -> Option<&EntryValue> {
        self.values
            .iter()
            .find(|(name, _)| *name == role)
            .map(|(_, value)| value)
    }

    /// Raw or trimmed value of a role; `None` when the slot had none.
    pub fn value(&self, role: &str) -> Option<FieldValue> {
        match self.get(role) {
            Some(EntryValue::Value(value)) => value.clone(),
            _ => None,
        }
    }

    /// Value of the anchor role, which is populated for every emitted entry.
    pub fn anchor(&self, role: &str) -> FieldValue {
        self.value(role).unwrap_or_default()
    }

    pub fn date(&self, role: &str) -> String {
        match self.get(role) {
            Some(EntryValue::Date(date)) => date.clone(),
            _ => String::new(),
        }
    }

    pub fn hours(&self, role: &str) -> f64 {
        match self.get(role) {
            Some(EntryValue::Hours(hours)) => *hours,
            _ => f64::NAN,
        }
    }
}

/// Extracts every entry of `family` from the record behind `reader`.
///
/// All columns looked at are recorded as consumed: every field of each
/// emitted slot, the anchor of the terminating slot, and any slots cleared
/// up to the family's cap.
pub fn extract_group(reader: &mut RecordReader<'_>, family: &GroupFamily) -> Vec<GroupEntry> {
    let mut entries = Vec::new();
    match family.extent {
        Extent::UntilGap { clear_through } => {
            let mut index = 1;
            while family.anchor_present(reader, index) {
                entries.push(read_entry(reader, family, index));
                index += 1;
            }
            if let Some(cap) = clear_through {
                let mut stray = 0usize;
                for slot in index..=cap {
                    stray += clear_slot(reader, family, slot);
                }
                if stray > 0 {
                    warn!(
                        family = family.name,
                        end = index - 1,
                        cap,
                        stray,
                        "cleared populated slots past end of group"
                    );
                }
            }
        }
        Extent::Slots(count) => {
            for index in 1..=count {
                if family.anchor_present(reader, index) {
                    entries.push(read_entry(reader, family, index));
                } else {
                    clear_slot(reader, family, index);
                }
            }
        }
    }
    trace!(family = family.name, entries = entries.len(), "extracted group");
    entries
}

fn read_entry(reader: &mut RecordReader<'_>, family: &GroupFamily, index: u32) -> GroupEntry {
    let values = family
        .fields
        .iter()
        .map(|field| {
            let raw = reader.slot(field.stem, index);
            let value = match field.kind {
                FieldKind::Raw => EntryValue::Value(raw.cloned()),
                FieldKind::Trimmed => EntryValue::Value(raw.map(FieldValue::trimmed)),
                FieldKind::Date => EntryValue::Date(sas_date::decode_date(raw)),
                FieldKind::Hours => EntryValue::Hours(numeric::hours(raw)),
            };
            (field.role, value)
        })
        .collect();
    GroupEntry { index, values }
}

/// Consumes every column of a slot; returns how many held a value.
fn clear_slot(reader: &mut RecordReader<'_>, family: &GroupFamily, index: u32) -> usize {
    family
        .fields
        .iter()
        .filter(|field| reader.clear_slot(field.stem, index))
        .count()
}

const fn valid_stem(stem: &str) -> bool {
    let bytes = stem.as_bytes();
    if bytes.is_empty() || bytes[bytes.len() - 1] == b'_' {
        return false;
    }
    let mut idx = 0;
    while idx < bytes.len() {
        let byte = bytes[idx];
        if !(byte.is_ascii_alphanumeric() || byte == b'_') {
            return false;
        }
        idx += 1;
    }
    true
}

const fn has_role(fields: &[GroupField], role: &str) -> bool {
    let mut idx = 0;
    while idx < fields.len() {
        if str_eq(fields[idx].role, role) {
            return true;
        }
        idx += 1;
    }
    false
}

const fn str_eq(left: &str, right: &str) -> bool {
    let (left, right) = (left.as_bytes(), right.as_bytes());
    if left.len() != right.len() {
        return false;
    }
    let mut idx = 0;
    while idx < left.len() {
        if left[idx] != right[idx] {
            return false;
        }
        idx += 1;
    }
    true
}
