//! Tool-wide constants.

/// Default delay in seconds between successive intel queries.
///
/// The external intelligence service rate-limits aggressively; a fixed pause
/// between invocations keeps batch runs under the limit.
pub const DEFAULT_QUERY_DELAY_SECS: f64 = 0.3;

/// Environment variable that overrides the intel query delay.
pub const QUERY_DELAY_ENV_VAR: &str = "ASTRONOMOS_QUERY_DELAY";

/// Default timeout in seconds for reverse-DNS (PTR) lookups.
pub const DEFAULT_DNS_TIMEOUT_SECS: f64 = 2.0;

/// Default executable invoked for intel lookups.
pub const DEFAULT_INTEL_COMMAND: &str = "astronomos-gr";
