pub mod decoded;
pub mod error;
pub mod options;
pub mod record;
pub mod section;
pub mod value;

pub use decoded::DecodedRecord;
pub use error::{Result, RosterError};
pub use options::{ConsumptionMode, DecodeOptions, FieldNaming};
pub use record::FlatRecord;
pub use section::{
    AcquisitionData, AdscEntry, AircraftEntry, AssignmentCodesSection, CodeEntry, CourseEntry,
    DegreeEntry, DegreeSection, DutyExperienceEntry, DutyHistoryEntry, DutySection, GeneralSection,
    JointEntry, JointSection, LanguageEntry, LanguageSection, NuclearEntry, PmeEntry, PmeSection,
    ProjectedAssignment, ProjectedCourse, ProjectedDuty, ProjectedSection, RatedSection, Section,
    SectionValue, SeiEntry, ServiceDatesSection, SpecialExperienceSection,
};
pub use value::FieldValue;
