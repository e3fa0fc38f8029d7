//! Decoded section shapes.
//!
//! Each section mirrors the nested object the personnel API returns for it.
//! Scalar lookups that found nothing are `None` and omitted on output; date
//! fields are always present and use `""` for "no date"; hour counts are
//! `f64` and may be NaN (serialized as `null`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::value::FieldValue;

/// The thirteen sections of a decoded personnel record.
///
/// Declaration order is the order sections are decoded and serialized in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    General,
    Projected,
    Duty,
    ServiceDates,
    Rated,
    Degree,
    Courses,
    Pme,
    Joint,
    Adsc,
    SpecialExperience,
    Language,
    AsgnCode,
}

impl Section {
    pub const ALL: [Section; 13] = [
        Section::General,
        Section::Projected,
        Section::Duty,
        Section::ServiceDates,
        Section::Rated,
        Section::Degree,
        Section::Courses,
        Section::Pme,
        Section::Joint,
        Section::Adsc,
        Section::SpecialExperience,
        Section::Language,
        Section::AsgnCode,
    ];

    /// Returns the key the section is serialized under.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::General => "general",
            Section::Projected => "projected",
            Section::Duty => "duty",
            Section::ServiceDates => "service_dates",
            Section::Rated => "rated",
            Section::Degree => "degree",
            Section::Courses => "courses",
            Section::Pme => "pme",
            Section::Joint => "joint",
            Section::Adsc => "adsc",
            Section::SpecialExperience => "special_experience",
            Section::Language => "language",
            Section::AsgnCode => "asgn_code",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    /// Parses a section key, accepting hyphens in place of underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == normalized)
            .ok_or_else(|| format!("Unknown section: {s}"))
    }
}

/// Decoded value of one section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SectionValue {
    General(GeneralSection),
    Projected(ProjectedSection),
    Duty(DutySection),
    ServiceDates(ServiceDatesSection),
    Rated(RatedSection),
    Degree(DegreeSection),
    Courses(Vec<CourseEntry>),
    Pme(PmeSection),
    Joint(JointSection),
    Adsc(Vec<AdscEntry>),
    SpecialExperience(SpecialExperienceSection),
    Language(LanguageSection),
    AsgnCode(AssignmentCodesSection),
}

impl SectionValue {
    pub fn section(&self) -> Section {
        match self {
            SectionValue::General(_) => Section::General,
            SectionValue::Projected(_) => Section::Projected,
            SectionValue::Duty(_) => Section::Duty,
            SectionValue::ServiceDates(_) => Section::ServiceDates,
            SectionValue::Rated(_) => Section::Rated,
            SectionValue::Degree(_) => Section::Degree,
            SectionValue::Courses(_) => Section::Courses,
            SectionValue::Pme(_) => Section::Pme,
            SectionValue::Joint(_) => Section::Joint,
            SectionValue::Adsc(_) => Section::Adsc,
            SectionValue::SpecialExperience(_) => Section::SpecialExperience,
            SectionValue::Language(_) => Section::Language,
            SectionValue::AsgnCode(_) => Section::AsgnCode,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GeneralSection {
    #[serde(rename = "firstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<FieldValue>,
    #[serde(rename = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proj_grade: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<FieldValue>,
    #[serde(rename = "adjYG", skip_serializing_if = "Option::is_none")]
    pub adj_yg: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tos: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tis: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub func_cat: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comp_cat: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_status: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounting_status: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posn: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aef: Option<FieldValue>,
    pub aef_start_date: String,
    pub aef_stop_date: String,
    /// Trimmed short tour number, or integer `0` when the row has none.
    pub short_tour_num: FieldValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectedSection {
    pub assignment: ProjectedAssignment,
    pub course: Vec<ProjectedCourse>,
    pub duty: ProjectedDuty,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectedAssignment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pas: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afsc: Option<FieldValue>,
    pub asd: String,
    pub pdd: String,
    pub rnltd: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedCourse {
    pub course: FieldValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_ct: Option<FieldValue>,
    pub start_date: String,
    pub grad_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectedDuty {
    pub eff_date: String,
    pub exp_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_pending: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmd_lvl_pending: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afsc_pending: Option<FieldValue>,
    pub eff_date_pending: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DutySection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_ct: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dafsc: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afsc_1: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afsc_2: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afsc_3: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_num: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_type: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_level: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_det: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pas: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub core_group: Option<FieldValue>,
    pub status_expire_date: String,
    pub history: Vec<DutyHistoryEntry>,
    pub experience: Vec<DutyExperienceEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DutyHistoryEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_num: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_type: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_level: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_det: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_majcom: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duty_title: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dafsc: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_state: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_level: Option<FieldValue>,
    pub eff_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DutyExperienceEntry {
    pub duty_title: FieldValue,
    pub duty_years: f64,
}

/// Career milestone dates, all passed through the day-count codec.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ServiceDatesSection {
    pub das: String,
    pub ddlds: String,
    pub duty_status_eff_date: String,
    pub odsd: String,
    pub strd: String,
    pub dos: String,
    pub ead: String,
    pub pay_date: String,
    pub tafcsd: String,
    pub tfcsd: String,
    pub grade_eff_date: String,
    pub dor: String,
    pub tafmsd: String,
    pub deros: String,
    pub cc_date: String,
    pub retsep_eff_date_proj: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RatedSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aero_rating: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aero_rating_ct: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flt_activity_code: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gates_curr: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flt_hrs_combat: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flt_hrs_instr: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flt_hrs_total: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avn_service_code: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avn_service_code_ct: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rdtm: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aircrew_position_id: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acp_status: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acp_status_ct: Option<FieldValue>,
    pub avn_service_date: String,
    pub acp_elig_date: String,
    pub acp_effective_date: String,
    pub acp_stop_date: String,
    pub aero_rating_date: String,
    pub return_to_fly_date: String,
    pub aircraft_history: Vec<AircraftEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AircraftEntry {
    pub aircraft: FieldValue,
    pub aircraft_date_flown: String,
    pub hours: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DegreeSection {
    pub history: Vec<DegreeEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest: Option<FieldValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DegreeEntry {
    pub degree: FieldValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree_ct: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school: Option<FieldValue>,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseEntry {
    pub course: FieldValue,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PmeSection {
    pub history: Vec<PmeEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pme_highest: Option<FieldValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PmeEntry {
    pub course: FieldValue,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JointSection {
    pub history: Vec<JointEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jso_code: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jda_flag: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jso_jsonum_status: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JointEntry {
    pub start_date: String,
    pub stop_date: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub tour_type: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posn: Option<FieldValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdscEntry {
    pub adsc: FieldValue,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpecialExperienceSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sei_duty: Option<FieldValue>,
    pub nuclear: Vec<NuclearEntry>,
    pub sei: Vec<SeiEntry>,
    pub acquisitions: AcquisitionData,
    #[serde(rename = "WIC", skip_serializing_if = "Option::is_none")]
    pub wic: Option<FieldValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NuclearEntry {
    pub nei: FieldValue,
    pub start_date: String,
    pub stop_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeiEntry {
    pub sei: FieldValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AcquisitionData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_level: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posn_cat: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posn_type: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LanguageSection {
    pub list: Vec<LanguageEntry>,
    /// Numeric coercion of the DLAB score; NaN when missing or unparseable.
    pub dlab_score: f64,
    pub dlab_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageEntry {
    pub id: FieldValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listen: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<FieldValue>,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssignmentCodesSection {
    pub block_code: Vec<CodeEntry>,
    pub avail_code: Vec<CodeEntry>,
    pub limit_code: Vec<CodeEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeEntry {
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<FieldValue>,
}
