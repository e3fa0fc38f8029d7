//! Configuration options for record decoding.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Whether decoding removes recognized fields from the caller's record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsumptionMode {
    /// Leave the record untouched; decoding is idempotent.
    #[default]
    Preserve,
    /// Remove every field a decoder read once decoding completes.
    Consume,
}

/// Naming convention of the export columns.
///
/// Some export generations prefix every column (e.g. `_grade`, `_course_1`);
/// the prefix is applied uniformly to scalar and indexed field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldNaming {
    pub prefix: String,
}

impl FieldNaming {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Column name of a scalar field.
    pub fn key(&self, base: &str) -> String {
        format!("{}{base}", self.prefix)
    }

    /// Column name of slot `index` (1-based) of an indexed field.
    pub fn indexed_key(&self, stem: &str, index: u32) -> String {
        format!("{}{stem}_{index}", self.prefix)
    }
}

/// Options controlling record decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    pub mode: ConsumptionMode,

    pub naming: FieldNaming,

    /// Convert binary column values to text before decoding.
    pub binary_prepass: bool,

    /// Column holding the record identifier in batch input.
    pub id_field: String,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            mode: ConsumptionMode::Preserve,
            naming: FieldNaming::default(),
            binary_prepass: true,
            id_field: "ID".to_string(),
        }
    }
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn with_mode(mut self, mode: ConsumptionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_naming(mut self, naming: FieldNaming) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_binary_prepass(mut self, enable: bool) -> Self {
        self.binary_prepass = enable;
        self
    }

    pub fn with_id_field(mut self, field: impl Into<String>) -> Self {
        self.id_field = field.into();
        self
    }
}
