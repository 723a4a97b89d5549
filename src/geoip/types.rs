//! GeoIP result types.

use serde::Serialize;

/// City-level geolocation result.
///
/// Every field is optional and serializes to JSON `null` when the database
/// has no data for the address.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GeoResult {
    /// City name (English)
    pub city: Option<String>,
    /// Country name (English)
    pub country: Option<String>,
    /// ISO 3166-1 country code
    pub country_iso: Option<String>,
    /// Approximate latitude
    pub latitude: Option<f64>,
    /// Approximate longitude
    pub longitude: Option<f64>,
}

/// Autonomous-system lookup result.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AsnResult {
    /// Autonomous system number
    pub asn: Option<u32>,
    /// Registered organization for the ASN
    pub asn_org: Option<String>,
    /// CIDR block the database matched (e.g. "8.8.8.0/24")
    pub network: Option<String>,
}
