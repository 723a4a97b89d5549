//! Error type definitions.
//!
//! This module defines the categorized error types used throughout the
//! application. Pipeline-level fall-through errors use `anyhow` with context;
//! the enums here cover the failures callers may want to match on.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error opening a MaxMind database file.
    #[error("Failed to open MaxMind database {path}: {source}")]
    GeoDatabaseError {
        /// Path of the database that could not be opened.
        path: PathBuf,
        /// The underlying reader error.
        source: maxminddb::MaxMindDbError,
    },
}

/// Error types for intel lookups via an external process.
///
/// PTR resolution never errors (failures collapse to "no PTR"), but a failed
/// intel invocation is fatal to the run: there is no retry, and the captured
/// process output is carried in the error for diagnosis.
#[derive(Error, Debug)]
pub enum IntelError {
    /// The external process could not be spawned or awaited.
    #[error("Failed to run intel command '{command}': {source}")]
    SpawnError {
        /// The executable that was invoked.
        command: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The external process exited with a non-zero status.
    #[error("Intel command '{command}' failed (exit {status})\nSTDOUT:\n{stdout}\nSTDERR:\n{stderr}")]
    CommandFailed {
        /// The executable that was invoked.
        command: String,
        /// Exit status rendered as a string (signal-terminated runs have no code).
        status: String,
        /// Captured standard output.
        stdout: String,
        /// Captured standard error.
        stderr: String,
    },

    /// The process succeeded but its stdout was not a single JSON object.
    #[error("Intel command '{command}' emitted invalid JSON: {source}")]
    InvalidJson {
        /// The executable that was invoked.
        command: String,
        /// The JSON parse error.
        source: serde_json::Error,
    },
}
