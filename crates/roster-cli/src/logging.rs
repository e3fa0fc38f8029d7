//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `error`: unreadable inputs, failed writes
//! - `warn`: stray values in unused slots, duplicate CSV columns
//! - `info`: per-file progress and totals
//! - `debug`: per-record section and field counts
//! - `trace`: per-group extraction and record identifiers (values redacted
//!   unless `--log-data` is given; rows are personnel data)
//!
//! Terminal output carries no timestamps. Log files always do, and never
//! contain ANSI escapes.

use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

static LOG_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder logged instead of field values when data logging is off.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Crates whose events follow the configured level; everything else stays at warn.
const WORKSPACE_TARGETS: [&str; 4] = ["roster_cli", "roster_core", "roster_ingest", "roster_model"];

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

pub fn log_data_enabled() -> bool {
    LOG_DATA_ENABLED.load(Ordering::Relaxed)
}

/// Returns `value` when data logging is enabled, otherwise a redacted token.
pub fn redact_value(value: &str) -> &str {
    if log_data_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` replace the configured level.
    pub env_override: bool,
    pub format: LogFormat,
    /// Colored terminal output. Ignored when logging to a file.
    pub ansi: bool,
    /// When set, logs are appended to this file instead of stderr.
    pub log_file: Option<PathBuf>,
    /// Whether field values may appear in log output.
    pub log_data: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            env_override: true,
            format: LogFormat::default(),
            ansi: io::stderr().is_terminal(),
            log_file: None,
            log_data: false,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_level_filter(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    #[must_use]
    pub fn with_env_override(mut self, enable: bool) -> Self {
        self.env_override = enable;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.ansi = enable;
        self
    }

    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    #[must_use]
    pub fn with_log_data(mut self, enable: bool) -> Self {
        self.log_data = enable;
        self
    }
}

/// Installs the global subscriber. Call once at startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    LOG_DATA_ENABLED.store(config.log_data, Ordering::Release);

    let layer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            format_layer(config.format, Mutex::new(file), false, true)
        }
        None => format_layer(config.format, io::stderr, config.ansi, false),
    };
    let filter = build_env_filter(config.level_filter, config.env_override);

    tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .init();
    Ok(())
}

/// Builds the formatting layer for `format`, writing through `writer`.
pub fn format_layer<W>(format: LogFormat, writer: W, ansi: bool, timestamps: bool) -> BoxedLayer
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false);
    match (format, timestamps) {
        (LogFormat::Json, _) => layer.json().with_current_span(true).boxed(),
        (LogFormat::Compact, true) => layer.compact().boxed(),
        (LogFormat::Compact, false) => layer.compact().without_time().boxed(),
        (LogFormat::Pretty, true) => layer.pretty().boxed(),
        (LogFormat::Pretty, false) => layer.pretty().without_time().boxed(),
    }
}

/// Directive string applying `level_filter` to the workspace crates.
pub fn default_directives(level_filter: LevelFilter) -> String {
    let level = level_filter.to_string().to_lowercase();
    let mut directives = String::from("warn");
    for target in WORKSPACE_TARGETS {
        directives.push_str(&format!(",{target}={level}"));
    }
    directives
}

fn build_env_filter(level_filter: LevelFilter, env_override: bool) -> EnvFilter {
    let fallback = || EnvFilter::new(default_directives(level_filter));
    if env_override {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::TempDir;

    use super::*;

    fn log_once(path: &Path, format: LogFormat, timestamps: bool) -> String {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .expect("open log file");
        let subscriber =
            tracing_subscriber::registry().with(format_layer(format, Mutex::new(file), false, timestamps));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(records = 3, "decoded file");
        });
        fs::read_to_string(path).expect("read log file")
    }

    #[test]
    fn directives_cover_workspace_crates() {
        assert_eq!(
            default_directives(LevelFilter::DEBUG),
            "warn,roster_cli=debug,roster_core=debug,roster_ingest=debug,roster_model=debug"
        );
        assert_eq!(
            default_directives(LevelFilter::OFF),
            "warn,roster_cli=off,roster_core=off,roster_ingest=off,roster_model=off"
        );
    }

    #[test]
    fn values_are_redacted_by_default() {
        assert!(!log_data_enabled());
        assert_eq!(redact_value("1234567890"), REDACTED_VALUE);
    }

    #[test]
    fn json_file_logs_carry_timestamp_and_fields() {
        let dir = TempDir::new().expect("temp dir");
        let output = log_once(&dir.path().join("roster.log"), LogFormat::Json, true);

        let event: serde_json::Value =
            serde_json::from_str(output.trim()).expect("one json event");
        assert_eq!(event["fields"]["message"], "decoded file");
        assert_eq!(event["fields"]["records"], 3);
        assert!(event.get("timestamp").is_some());
        assert!(event.get("target").is_none());
    }

    #[test]
    fn compact_terminal_logs_start_with_the_level() {
        let dir = TempDir::new().expect("temp dir");
        let output = log_once(&dir.path().join("roster.log"), LogFormat::Compact, false);

        assert!(output.trim_start().starts_with("INFO"));
        assert!(output.contains("decoded file"));
        assert!(output.contains("records=3"));
    }
}
