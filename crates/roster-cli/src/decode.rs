//! Decode pipeline: options, file ingest, batch decoding and response output.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use roster_core::assemble_batch;
use roster_ingest::{expand_inputs, read_records};
use roster_model::{ConsumptionMode, DecodeOptions, DecodedRecord, FieldNaming};
use tracing::{error, info, info_span, trace};

use crate::logging::redact_value;
use crate::types::{ApiResponse, DecodeRun, FileReport};

/// Flag values that override the configured decode options.
#[derive(Debug, Clone, Default)]
pub struct OptionOverrides {
    pub id_field: Option<String>,
    pub consume: bool,
    pub field_prefix: Option<String>,
    pub no_binary_prepass: bool,
}

/// Loads decode options from a TOML file, or the defaults when no file is given.
pub fn load_options(config: Option<&Path>) -> Result<DecodeOptions> {
    let Some(path) = config else {
        return Ok(DecodeOptions::default());
    };
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    DecodeOptions::from_toml_str(&source)
        .with_context(|| format!("parse config: {}", path.display()))
}

pub fn apply_overrides(mut options: DecodeOptions, overrides: &OptionOverrides) -> DecodeOptions {
    if let Some(id_field) = &overrides.id_field {
        options.id_field.clone_from(id_field);
    }
    if overrides.consume {
        options.mode = ConsumptionMode::Consume;
    }
    if let Some(prefix) = &overrides.field_prefix {
        options.naming = FieldNaming::with_prefix(prefix.as_str());
    }
    if overrides.no_binary_prepass {
        options.binary_prepass = false;
    }
    options
}

/// Decodes every input file. Unreadable files are reported and skipped.
///
/// # Errors
///
/// Fails when an input folder cannot be listed or no input files remain.
pub fn decode_inputs(inputs: &[PathBuf], options: &DecodeOptions) -> Result<DecodeRun> {
    let files = expand_inputs(inputs)?;
    if files.is_empty() {
        bail!("no input files found");
    }

    let mut run = DecodeRun::default();
    for path in files {
        let span = info_span!("file", path = %path.display());
        let _guard = span.enter();

        let mut rows = match read_records(&path) {
            Ok(rows) => rows,
            Err(err) => {
                error!(error = %format!("{err:#}"), "failed to read input");
                run.files.push(FileReport {
                    path,
                    records: 0,
                    unmapped_fields: 0,
                    error: Some(format!("{err:#}")),
                });
                continue;
            }
        };

        let decoded = assemble_batch(&mut rows, options);
        let unmapped = unmapped_columns(&decoded);
        for record in &decoded {
            trace!(
                record_id = redact_value(&record.record_id.to_string()),
                unmapped = record.unmapped.len(),
                "decoded row"
            );
        }
        info!(
            records = decoded.len(),
            unmapped_fields = unmapped.len(),
            "decoded file"
        );

        run.files.push(FileReport {
            path,
            records: decoded.len(),
            unmapped_fields: unmapped.len(),
            error: None,
        });
        run.records.extend(decoded);
    }
    Ok(run)
}

fn unmapped_columns(records: &[DecodedRecord]) -> BTreeSet<&str> {
    records
        .iter()
        .flat_map(|record| record.unmapped.keys().map(String::as_str))
        .collect()
}

/// Writes the `{ "success": true, "data": [...] }` envelope to `output` or stdout.
pub fn write_response(records: &[DecodedRecord], output: Option<&Path>, pretty: bool) -> Result<()> {
    match output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create output: {}", path.display()))?;
            write_envelope(BufWriter::new(file), records, pretty)
                .with_context(|| format!("write output: {}", path.display()))
        }
        None => write_envelope(BufWriter::new(io::stdout().lock()), records, pretty)
            .context("write output to stdout"),
    }
}

fn write_envelope<W: Write>(mut writer: W, records: &[DecodedRecord], pretty: bool) -> Result<()> {
    let response = ApiResponse::ok(records);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, &response)?;
    } else {
        serde_json::to_writer(&mut writer, &response)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
