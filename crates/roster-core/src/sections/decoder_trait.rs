//! Section decoder trait and registry.
//!
//! Each of the thirteen record sections has one decoder. The
//! [`DecoderRegistry`] holds them in the order the assembler runs them, and
//! [`default_registry()`] returns the cached registry with every standard
//! section.
//!
//! # Example
//!
//! ```
//! use roster_core::{RecordReader, default_registry};
//! use roster_model::{FieldNaming, FlatRecord, Section};
//!
//! let record: FlatRecord = [("grade", "O3")].into_iter().collect();
//! let naming = FieldNaming::default();
//! let mut reader = RecordReader::new(&record, &naming);
//! let decoder = default_registry().get(Section::General).unwrap();
//! let value = decoder.decode(&mut reader);
//! assert_eq!(value.section(), Section::General);
//! ```

use std::sync::OnceLock;

use roster_model::{Section, SectionValue};

use crate::reader::RecordReader;

/// Decodes one section of a personnel record.
///
/// Decoders are total: every well-formed record yields a section value,
/// with absent fields resolved to their section-specific defaults.
pub trait SectionDecoder: Send + Sync {
    /// Returns the section this decoder produces.
    fn section(&self) -> Section;

    /// Returns a human-readable description of the decoder.
    fn description(&self) -> &'static str {
        "Section decoder"
    }

    /// Reads the section's fields through `reader` and builds the section.
    fn decode(&self, reader: &mut RecordReader<'_>) -> SectionValue;
}

/// Ordered set of section decoders, at most one per section.
pub struct DecoderRegistry {
    decoders: Vec<Box<dyn SectionDecoder>>,
}

impl DecoderRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            decoders: Vec::new(),
        }
    }

    /// Registers a decoder for its section.
    ///
    /// A decoder already registered for the same section is replaced in place,
    /// keeping its position in the decode order.
    pub fn register(&mut self, decoder: Box<dyn SectionDecoder>) {
        let section = decoder.section();
        match self
            .decoders
            .iter()
            .position(|existing| existing.section() == section)
        {
            Some(idx) => self.decoders[idx] = decoder,
            None => self.decoders.push(decoder),
        }
    }

    pub fn get(&self, section: Section) -> Option<&dyn SectionDecoder> {
        self.decoders
            .iter()
            .find(|decoder| decoder.section() == section)
            .map(|decoder| decoder.as_ref())
    }

    /// Iterates decoders in decode order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn SectionDecoder> + '_ {
        self.decoders.iter().map(|decoder| decoder.as_ref())
    }

    pub fn sections(&self) -> impl Iterator<Item = Section> + '_ {
        self.decoders.iter().map(|decoder| decoder.section())
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        build_default_registry()
    }
}

static DEFAULT_REGISTRY: OnceLock<DecoderRegistry> = OnceLock::new();

/// Returns the registry with all thirteen section decoders.
///
/// The registry is built on first access and shared afterwards.
pub fn default_registry() -> &'static DecoderRegistry {
    DEFAULT_REGISTRY.get_or_init(build_default_registry)
}

/// Builds a registry with every standard decoder in [`Section::ALL`] order.
pub fn build_default_registry() -> DecoderRegistry {
    use super::{
        adsc, asgn_code, courses, degree, duty, general, joint, language, pme, projected, rated,
        service_dates, special_experience,
    };

    let mut registry = DecoderRegistry::new();
    let decoders = [
        FunctionDecoder::new(
            Section::General,
            "Grade, component, position and AEF window",
            general::decode_value,
        ),
        FunctionDecoder::new(
            Section::Projected,
            "Projected assignment, duty and training",
            projected::decode_value,
        ),
        FunctionDecoder::new(
            Section::Duty,
            "Current duty, duty history and AFS experience",
            duty::decode_value,
        ),
        FunctionDecoder::new(
            Section::ServiceDates,
            "Career milestone dates",
            service_dates::decode_value,
        ),
        FunctionDecoder::new(
            Section::Rated,
            "Aviation status and aircraft history",
            rated::decode_value,
        ),
        FunctionDecoder::new(Section::Degree, "Academic degrees", degree::decode_value),
        FunctionDecoder::new(Section::Courses, "Completed courses", courses::decode_value),
        FunctionDecoder::new(Section::Pme, "Professional military education", pme::decode_value),
        FunctionDecoder::new(Section::Joint, "Joint duty assignments", joint::decode_value),
        FunctionDecoder::new(Section::Adsc, "Active duty service commitments", adsc::decode_value),
        FunctionDecoder::new(
            Section::SpecialExperience,
            "Special experience identifiers and acquisition data",
            special_experience::decode_value,
        ),
        FunctionDecoder::new(Section::Language, "Language proficiency", language::decode_value),
        FunctionDecoder::new(
            Section::AsgnCode,
            "Assignment block, availability and limitation codes",
            asgn_code::decode_value,
        ),
    ];
    for decoder in decoders {
        registry.register(Box::new(decoder));
    }
    registry
}

type DecodeFn = fn(&mut RecordReader<'_>) -> SectionValue;

/// Adapts a decode function to the [`SectionDecoder`] trait.
pub struct FunctionDecoder {
    section: Section,
    description: &'static str,
    decode_fn: DecodeFn,
}

impl FunctionDecoder {
    pub fn new(section: Section, description: &'static str, decode_fn: DecodeFn) -> Self {
        Self {
            section,
            description,
            decode_fn,
        }
    }
}

impl SectionDecoder for FunctionDecoder {
    fn section(&self) -> Section {
        self.section
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn decode(&self, reader: &mut RecordReader<'_>) -> SectionValue {
        (self.decode_fn)(reader)
    }
}
