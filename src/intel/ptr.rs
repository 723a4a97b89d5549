//! Reverse-DNS (PTR) resolution.

use std::net::IpAddr;
use std::sync::Arc;

use hickory_resolver::TokioAsyncResolver;

use super::PtrLookup;

/// PTR lookup backed by a hickory DNS resolver.
///
/// The resolver's timeout bounds every query; see
/// [`crate::initialization::init_resolver`].
pub struct DnsPtrResolver {
    resolver: Arc<TokioAsyncResolver>,
}

impl DnsPtrResolver {
    /// Wraps an already-configured resolver.
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

impl PtrLookup for DnsPtrResolver {
    /// Returns the first PTR target without its trailing dot, or `None` on
    /// any failure (timeout, NXDOMAIN, malformed address).
    async fn resolve_ptr(&self, ip: &str) -> Option<String> {
        let addr: IpAddr = ip.parse().ok()?;
        match self.resolver.reverse_lookup(addr).await {
            Ok(response) => response
                .iter()
                .next()
                .map(|name| name.to_utf8().trim_end_matches('.').to_string()),
            Err(e) => {
                log::debug!("Reverse DNS lookup failed for {ip}: {e}");
                None
            }
        }
    }
}
