//! Assembled output of one decode pass.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::section::{
    AssignmentCodesSection, AdscEntry, CourseEntry, DegreeSection, DutySection, GeneralSection,
    JointSection, LanguageSection, PmeSection, ProjectedSection, RatedSection, Section,
    SectionValue, ServiceDatesSection, SpecialExperienceSection,
};
use crate::value::FieldValue;

/// A nested personnel record built from one flat row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedRecord {
    /// Identifier supplied by the caller; never derived from the row.
    pub record_id: FieldValue,
    #[serde(flatten)]
    pub sections: BTreeMap<Section, SectionValue>,
    /// Fields no section decoder recognized.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub unmapped: BTreeMap<String, FieldValue>,
}

macro_rules! section_accessor {
    ($name:ident, $variant:ident, $ty:ty) => {
        pub fn $name(&self) -> Option<&$ty> {
            match self.sections.get(&Section::$variant) {
                Some(SectionValue::$variant(value)) => Some(value),
                _ => None,
            }
        }
    };
}

impl DecodedRecord {
    pub fn new(record_id: impl Into<FieldValue>) -> Self {
        Self {
            record_id: record_id.into(),
            sections: BTreeMap::new(),
            unmapped: BTreeMap::new(),
        }
    }

    pub fn section(&self, section: Section) -> Option<&SectionValue> {
        self.sections.get(&section)
    }

    pub fn insert_section(&mut self, value: SectionValue) {
        self.sections.insert(value.section(), value);
    }

    section_accessor!(general, General, GeneralSection);
    section_accessor!(projected, Projected, ProjectedSection);
    section_accessor!(duty, Duty, DutySection);
    section_accessor!(service_dates, ServiceDates, ServiceDatesSection);
    section_accessor!(rated, Rated, RatedSection);
    section_accessor!(degree, Degree, DegreeSection);
    section_accessor!(courses, Courses, Vec<CourseEntry>);
    section_accessor!(pme, Pme, PmeSection);
    section_accessor!(joint, Joint, JointSection);
    section_accessor!(adsc, Adsc, Vec<AdscEntry>);
    section_accessor!(special_experience, SpecialExperience, SpecialExperienceSection);
    section_accessor!(language, Language, LanguageSection);
    section_accessor!(asgn_code, AsgnCode, AssignmentCodesSection);
}
