//! GeoIP/ASN lookup using MaxMind GeoLite2 databases.
//!
//! This module provides the narrow interface the geo pipeline uses to query
//! its external database collaborator, plus the production implementation
//! backed by local MaxMind database files. Readers are opened once per run
//! and held for its duration.

mod lookup;
mod types;

// Re-export public API
pub use lookup::MaxmindGeoDb;
pub use types::{AsnResult, GeoResult};

/// Read-only random access to city-level geolocation and ASN data keyed by IP.
///
/// Lookup misses and malformed addresses are expected conditions: both
/// operations map them to the all-`None` result and never error. This keeps
/// the pipeline driver free of database-specific failure handling and lets
/// tests substitute an in-memory implementation.
pub trait GeoLookup {
    /// Returns city-level geolocation for `ip`, all-`None` on no match.
    fn geolocate(&self, ip: &str) -> GeoResult;

    /// Returns autonomous-system data for `ip`, all-`None` on no match.
    fn lookup_asn(&self, ip: &str) -> AsnResult;
}
