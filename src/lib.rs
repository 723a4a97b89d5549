//! ip_enrich library: streaming IP enrichment pipelines.
//!
//! This library provides two line-oriented batch pipelines that enrich IP
//! addresses and stream JSONL records to output files:
//!
//! - The **geo** pipeline reads JSONL records containing an `ip` field and
//!   merges in city-level geolocation and ASN data from local MaxMind
//!   GeoLite2 databases.
//! - The **intel** pipeline reads plain IP-per-line text, resolves each
//!   address's PTR record, and queries an external intelligence service for
//!   every hostname found.
//!
//! Both pipelines share the same shape: a lazy line reader, an enricher
//! wrapping an external lookup collaborator, and a JSONL writer that flushes
//! one record per line. Processing is strictly sequential; each line is fully
//! enriched and written before the next is read.
//!
//! # Example
//!
//! ```no_run
//! use ip_enrich::{run_geo, GeoConfig, MaxmindGeoDb};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = GeoConfig {
//!     input: PathBuf::from("ips.jsonl"),
//!     output: PathBuf::from("out/enriched.jsonl"),
//! };
//! let db = MaxmindGeoDb::open("GeoLite2-City.mmdb", "GeoLite2-ASN.mmdb")?;
//! let report = run_geo(&config, &db).await?;
//! println!("Wrote {} records", report.records_written);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod geoip;
pub mod initialization;
pub mod input;
pub mod intel;
pub mod output;
pub mod pipeline;

// Re-export public API
pub use config::{GeoConfig, IntelConfig, LogFormat, LogLevel};
pub use geoip::{AsnResult, GeoLookup, GeoResult, MaxmindGeoDb};
pub use intel::{CommandIntelSource, DnsPtrResolver, IntelRecord, IntelSource, PtrLookup};
pub use pipeline::{run_geo, run_intel, PipelineReport};
