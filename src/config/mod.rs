//! Configuration types and constants.
//!
//! This module defines the library-level configuration structs for both
//! pipelines, the logging enums shared with the CLI, and tool-wide constants.

mod constants;
mod types;

pub use constants::{
    DEFAULT_DNS_TIMEOUT_SECS, DEFAULT_INTEL_COMMAND, DEFAULT_QUERY_DELAY_SECS,
    QUERY_DELAY_ENV_VAR,
};
pub use types::{GeoConfig, IntelConfig, LogFormat, LogLevel};
