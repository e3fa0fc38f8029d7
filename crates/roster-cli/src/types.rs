use std::path::PathBuf;

use roster_model::DecodedRecord;
use serde::Serialize;

/// Outcome of decoding one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub records: usize,
    /// Distinct column names left unmapped across the file's rows.
    pub unmapped_fields: usize,
    /// Set when the file could not be read; its rows are then skipped.
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub struct DecodeRun {
    pub records: Vec<DecodedRecord>,
    pub files: Vec<FileReport>,
}

impl DecodeRun {
    pub fn has_errors(&self) -> bool {
        self.files.iter().any(|file| file.error.is_some())
    }
}

/// JSON body written by `roster decode`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<'a> {
    pub success: bool,
    pub data: &'a [DecodedRecord],
}

impl<'a> ApiResponse<'a> {
    pub fn ok(data: &'a [DecodedRecord]) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
