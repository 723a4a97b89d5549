//! Intel pipeline record types.

use serde::Serialize;
use serde_json::Value;

/// One enriched record for the intel pipeline, serialized as one JSONL line.
#[derive(Debug, Clone, Serialize)]
pub struct IntelRecord {
    /// The input IP address, verbatim
    pub ip: String,
    /// Resolved PTR hostname, `null` when reverse DNS found nothing
    pub ptr: Option<String>,
    /// Whether a PTR record was resolved
    pub has_ptr: bool,
    /// Opaque intel payload, populated only when a PTR was resolved
    pub astronomos_el_ptr: Option<Value>,
}

impl IntelRecord {
    /// Builds a record for `ip` with an optional resolved PTR name.
    ///
    /// The intel payload starts empty; the driver fills it in after a
    /// successful fetch.
    pub fn new(ip: &str, ptr: Option<String>) -> Self {
        Self {
            ip: ip.to_string(),
            has_ptr: ptr.is_some(),
            ptr,
            astronomos_el_ptr: None,
        }
    }
}
