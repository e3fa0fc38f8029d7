//! Input discovery and format dispatch.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use roster_model::FlatRecord;

use crate::csv_records::read_csv_records;
use crate::json_records::read_json_records;

/// Supported export file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    /// Detects the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }
}

/// Lists the CSV and JSON files directly inside `dir`, sorted by file name.
pub fn discover_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("not a directory: {}", dir.display());
    }
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("read directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read directory: {}", dir.display()))?;
        let path = entry.path();
        if path.is_file() && InputFormat::from_path(&path).is_some() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Expands directories into their input files; files are kept as given.
pub fn expand_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            files.extend(discover_inputs(input)?);
        } else {
            files.push(input.clone());
        }
    }
    Ok(files)
}

/// Reads a file in whichever supported format its extension names.
pub fn read_records(path: &Path) -> Result<Vec<FlatRecord>> {
    match InputFormat::from_path(path) {
        Some(InputFormat::Csv) => read_csv_records(path),
        Some(InputFormat::Json) => read_json_records(path),
        None => bail!("unsupported input format: {}", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(InputFormat::from_path(Path::new("rows.CSV")), Some(InputFormat::Csv));
        assert_eq!(InputFormat::from_path(Path::new("rows.json")), Some(InputFormat::Json));
        assert_eq!(InputFormat::from_path(Path::new("rows.xpt")), None);
        assert_eq!(InputFormat::from_path(Path::new("rows")), None);
    }
}
