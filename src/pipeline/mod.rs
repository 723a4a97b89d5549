//! Pipeline drivers.
//!
//! Each driver wires a [`LineReader`](crate::input::LineReader), an enricher
//! collaborator, and a [`JsonlWriter`](crate::output::JsonlWriter) into a
//! strictly sequential loop: read a line, parse and validate it, enrich,
//! write, repeat until end of file. Malformed lines are logged and skipped;
//! they never abort the run. There is no rollback: a crash mid-run leaves a
//! partial but valid-prefix JSONL file.

mod geo;
mod intel;

pub use geo::run_geo;
pub use intel::run_intel;

/// Summary of one completed pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Total lines read from the input file
    pub lines_read: usize,
    /// Records written to the output file
    pub records_written: usize,
    /// Lines skipped (malformed, blank, or comments)
    pub lines_skipped: usize,
    /// Wall-clock duration of the run in seconds
    pub elapsed_seconds: f64,
}
