//! MaxMind-backed lookup implementation.
//!
//! Wraps one GeoLite2-City reader and one GeoLite2-ASN reader, both opened
//! once at startup and held for the whole run.

use std::net::IpAddr;
use std::path::Path;

use maxminddb::{geoip2, Reader};

use crate::error_handling::InitializationError;

use super::types::{AsnResult, GeoResult};
use super::GeoLookup;

/// GeoIP databases for one enrichment run.
///
/// Holds open readers for the City and ASN databases. Opening is fatal on
/// failure (missing file, corrupt database); lookups never fail.
#[derive(Debug)]
pub struct MaxmindGeoDb {
    city: Reader<Vec<u8>>,
    asn: Reader<Vec<u8>>,
}

impl MaxmindGeoDb {
    /// Opens the City and ASN databases at the given paths.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::GeoDatabaseError` naming the offending
    /// path if either database cannot be opened.
    pub fn open<P: AsRef<Path>>(city_path: P, asn_path: P) -> Result<Self, InitializationError> {
        let city = Reader::open_readfile(&city_path).map_err(|source| {
            InitializationError::GeoDatabaseError {
                path: city_path.as_ref().to_path_buf(),
                source,
            }
        })?;
        let asn = Reader::open_readfile(&asn_path).map_err(|source| {
            InitializationError::GeoDatabaseError {
                path: asn_path.as_ref().to_path_buf(),
                source,
            }
        })?;
        Ok(Self { city, asn })
    }
}

impl GeoLookup for MaxmindGeoDb {
    fn geolocate(&self, ip: &str) -> GeoResult {
        // Malformed addresses are expected input; they map to the null result
        let Ok(addr) = ip.parse::<IpAddr>() else {
            return GeoResult::default();
        };

        let lookup = match self.city.lookup(addr) {
            Ok(result) => result,
            Err(e) => {
                log::debug!("City lookup failed for {ip}: {e}");
                return GeoResult::default();
            }
        };
        if !lookup.has_data() {
            return GeoResult::default();
        }

        let city: geoip2::City = match lookup.decode() {
            Ok(Some(city)) => city,
            Ok(None) => return GeoResult::default(),
            Err(e) => {
                log::debug!("City decode failed for {ip}: {e}");
                return GeoResult::default();
            }
        };

        GeoResult {
            city: city.city.names.english.map(|s| s.to_string()),
            country: city.country.names.english.map(|s| s.to_string()),
            country_iso: city.country.iso_code.map(|s| s.to_string()),
            latitude: city.location.latitude,
            longitude: city.location.longitude,
        }
    }

    fn lookup_asn(&self, ip: &str) -> AsnResult {
        let Ok(addr) = ip.parse::<IpAddr>() else {
            return AsnResult::default();
        };

        let lookup = match self.asn.lookup(addr) {
            Ok(result) => result,
            Err(e) => {
                log::debug!("ASN lookup failed for {ip}: {e}");
                return AsnResult::default();
            }
        };
        if !lookup.has_data() {
            return AsnResult::default();
        }

        let asn: geoip2::Asn = match lookup.decode() {
            Ok(Some(asn)) => asn,
            Ok(None) => return AsnResult::default(),
            Err(e) => {
                log::debug!("ASN decode failed for {ip}: {e}");
                return AsnResult::default();
            }
        };

        AsnResult {
            asn: asn.autonomous_system_number,
            asn_org: asn.autonomous_system_organization.map(|s| s.to_string()),
            // The matched network is available whether or not data was found;
            // only report it alongside a real match
            network: lookup.network().ok().map(|n| n.to_string()),
        }
    }
}
