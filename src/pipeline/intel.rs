//! PTR/intel enrichment driver.

use std::time::Duration;

use anyhow::{Context, Result};
use log::info;

use crate::config::IntelConfig;
use crate::input::LineReader;
use crate::intel::{IntelRecord, IntelSource, PtrLookup};
use crate::output::JsonlWriter;

use super::PipelineReport;

/// Runs the PTR/intel enrichment pipeline.
///
/// Reads one IP per line from `config.input` (blank lines and `#` comments
/// ignored), resolves each address's PTR record, and queries the intel
/// source for every hostname found, pausing `config.query_delay_secs`
/// before each query. Records stream to `config.output` as JSONL.
///
/// PTR failures are not errors: the record is written with `has_ptr: false`
/// and the intel source is never consulted for that line. A failed intel
/// fetch, by contrast, aborts the run with the process diagnostics attached.
///
/// # Errors
///
/// Fails if the input file cannot be opened, the output file cannot be
/// created, a write fails, or an intel fetch fails.
pub async fn run_intel<P, S>(
    config: &IntelConfig,
    ptr_lookup: &P,
    intel_source: &S,
) -> Result<PipelineReport>
where
    P: PtrLookup,
    S: IntelSource,
{
    let started = std::time::Instant::now();
    info!("Starting {}", config.input.display());

    let mut reader = LineReader::open(&config.input).await?;
    let mut writer = JsonlWriter::create(&config.output).await?;

    let delay = Duration::from_secs_f64(config.query_delay_secs);
    let mut lines_read = 0;
    let mut records_written = 0;
    let mut lines_skipped = 0;

    while let Some((lineno, line)) = reader.next_line().await? {
        lines_read += 1;

        let ip = line.trim();
        if ip.is_empty() || ip.starts_with('#') {
            lines_skipped += 1;
            continue;
        }

        let ptr = ptr_lookup.resolve_ptr(ip).await;
        let mut record = IntelRecord::new(ip, ptr);

        if let Some(hostname) = record.ptr.clone() {
            // Fixed pacing between successive intel queries
            tokio::time::sleep(delay).await;
            let intel = intel_source.fetch(&hostname).await.with_context(|| {
                format!(
                    "Intel fetch failed for {hostname} (line {lineno} of {})",
                    config.input.display()
                )
            })?;
            record.astronomos_el_ptr = Some(intel);
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
