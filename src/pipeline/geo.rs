//! Geo/ASN enrichment driver.

use anyhow::Result;
use log::{info, warn};
use serde_json::Value;

use crate::config::GeoConfig;
use crate::geoip::GeoLookup;
use crate::input::LineReader;
use crate::output::JsonlWriter;

use super::PipelineReport;

/// Runs the geo/ASN enrichment pipeline.
///
/// Reads JSONL records from `config.input`, merges `geo` and `asn` objects
/// into each record via the `lookup` collaborator, and streams the enriched
/// records to `config.output`. Lines that are not JSON objects with a string
/// `ip` field are logged and skipped.
///
/// # Errors
///
/// Fails if the input file cannot be opened, the output file cannot be
/// created, or a write fails. Per-line parse failures are not errors.
pub async fn run_geo<G: GeoLookup>(config: &GeoConfig, lookup: &G) -> Result<PipelineReport> {
    let started = std::time::Instant::now();
    info!("Starting {}", config.input.display());

    let mut reader = LineReader::open(&config.input).await?;
    let mut writer = JsonlWriter::create(&config.output).await?;

    let mut lines_read = 0;
    let mut records_written = 0;
    let mut lines_skipped = 0;

    while let Some((lineno, line)) = reader.next_line().await? {
        lines_read += 1;

        let mut record: Value = match serde_json::from_str(&line) {
            Ok(record) => record,
            Err(e) => {
                warn!(
                    "Skipping line {} in {} due to JSON decode error: {}",
                    lineno,
                    config.input.display(),
                    e
                );
                lines_skipped += 1;
                continue;
            }
        };

        let Some(ip) = record.get("ip").and_then(Value::as_str).map(String::from) else {
            warn!(
                "Skipping line {} in {}: no usable 'ip' field",
                lineno,
                config.input.display()
            );
            lines_skipped += 1;
            continue;
        };

        let geo = lookup.geolocate(&ip);
        let asn = lookup.lookup_asn(&ip);

        // The ip check above guarantees record is an object
        if let Some(map) = record.as_object_mut() {
            map.insert("geo".to_string(), serde_json::to_value(geo)?);
            map.insert("asn".to_string(), serde_json::to_value(asn)?);
        }

        writer.write_record(&record).await?;
        records_written += 1;
    }

    info!("Finished {}", config.input.display());
    Ok(PipelineReport {
        lines_read,
        records_written,
        lines_skipped,
        elapsed_seconds: started.elapsed().as_secs_f64(),
    })
}
