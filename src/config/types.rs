//! Configuration types and CLI-shared enums.
//!
//! The config structs here carry no clap derives; the binary owns the CLI
//! surface and converts parsed arguments into these structs. `LogLevel` and
//! `LogFormat` are shared with the CLI via `ValueEnum`.

use std::path::PathBuf;

use clap::ValueEnum;

use super::constants::{DEFAULT_DNS_TIMEOUT_SECS, DEFAULT_INTEL_COMMAND, DEFAULT_QUERY_DELAY_SECS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Configuration for the geo/ASN enrichment pipeline.
///
/// Database paths are handled separately: the binary opens the MaxMind
/// readers once at startup and passes them into the pipeline, so the config
/// only carries the file endpoints.
#[derive(Debug, Clone)]
pub struct GeoConfig {
    /// JSONL input file (one JSON object per line, containing `ip`)
    pub input: PathBuf,

    /// JSONL output file; parent directories are created if absent
    pub output: PathBuf,
}

/// Configuration for the PTR/intel enrichment pipeline.
#[derive(Debug, Clone)]
pub struct IntelConfig {
    /// Plain-text input file (one IP per line, `#` comments allowed)
    pub input: PathBuf,

    /// JSONL output file; parent directories are created if absent
    pub output: PathBuf,

    /// Seconds to pause before each intel query
    pub query_delay_secs: f64,

    /// Timeout in seconds for reverse-DNS lookups
    pub dns_timeout_secs: f64,

    /// Executable invoked for intel lookups
    pub intel_command: String,
}

impl Default for IntelConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("ips.txt"),
            output: PathBuf::from("intel.jsonl"),
            query_delay_secs: DEFAULT_QUERY_DELAY_SECS,
            dns_timeout_secs: DEFAULT_DNS_TIMEOUT_SECS,
            intel_command: DEFAULT_INTEL_COMMAND.to_string(),
        }
    }
}
