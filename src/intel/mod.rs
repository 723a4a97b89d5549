//! PTR resolution and intel lookups.
//!
//! The intel pipeline talks to two external collaborators: a DNS resolver
//! for reverse (PTR) lookups and an intelligence service keyed by hostname.
//! Both sit behind narrow traits so the pipeline driver does not depend on a
//! specific resolver or on the external tool's invocation syntax, and so
//! tests can substitute mocks with call-count assertions.
//!
//! The two collaborators fail differently, on purpose: PTR resolution
//! collapses every failure to "no PTR", while a failed intel invocation is
//! fatal to the run.

mod ptr;
mod source;
mod types;

// Re-export public API
pub use ptr::DnsPtrResolver;
pub use source::CommandIntelSource;
pub use types::IntelRecord;

use crate::error_handling::IntelError;

/// Reverse-DNS lookup collaborator.
pub trait PtrLookup {
    /// Resolves the PTR record for `ip`.
    ///
    /// Any failure (timeout, NXDOMAIN, malformed address) yields `None`;
    /// this operation never errors.
    fn resolve_ptr(&self, ip: &str) -> impl std::future::Future<Output = Option<String>> + Send;
}

/// External intelligence service keyed by hostname.
pub trait IntelSource {
    /// Fetches the intel payload for `hostname`.
    ///
    /// The payload is opaque JSON. Unlike PTR resolution, failures here
    /// propagate: there is no meaningful partial result to write.
    fn fetch(
        &self,
        hostname: &str,
    ) -> impl std::future::Future<Output = Result<serde_json::Value, IntelError>> + Send;
}
