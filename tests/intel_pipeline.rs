//! End-to-end tests for the PTR/intel enrichment pipeline with mocked
//! DNS and intel collaborators.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use ip_enrich::error_handling::IntelError;
use ip_enrich::{run_intel, IntelConfig, IntelSource, PtrLookup};
use serde_json::{json, Value};

/// PTR lookup backed by a fixed table; misses resolve to `None`.
struct FakePtrLookup {
    table: HashMap<String, String>,
    calls: AtomicUsize,
}

impl FakePtrLookup {
    fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            table: entries
                .iter()
                .map(|(ip, ptr)| (ip.to_string(), ptr.to_string()))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl PtrLookup for FakePtrLookup {
    async fn resolve_ptr(&self, ip: &str) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.table.get(ip).cloned()
    }
}

/// Intel source returning a canned payload, counting invocations.
struct FakeIntelSource {
    calls: AtomicUsize,
    fail: bool,
}

impl FakeIntelSource {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }
}

impl IntelSource for FakeIntelSource {
    async fn fetch(&self, hostname: &str) -> Result<Value, IntelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(IntelError::CommandFailed {
                command: "astronomos-gr".to_string(),
                status: "2".to_string(),
                stdout: String::new(),
                stderr: "rate limited".to_string(),
            });
        }
        Ok(json!({"hostname": hostname, "score": 7}))
    }
}

fn config_for(dir: &tempfile::TempDir, input_contents: &str) -> IntelConfig {
    let input = dir.path().join("ips.txt");
    fs::write(&input, input_contents).unwrap();
    IntelConfig {
        input,
        output: dir.path().join("out.jsonl"),
        query_delay_secs: 0.0, // no pacing needed against mocks
        ..IntelConfig::default()
    }
}

fn read_output_lines(path: &PathBuf) -> Vec<Value> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test]
async fn test_ptr_hit_fetches_intel() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir, "8.8.8.8\n");
    let ptr = FakePtrLookup::new(&[("8.8.8.8", "dns.google")]);
    let intel = FakeIntelSource::new();

    let report = run_intel(&config, &ptr, &intel).await.unwrap();
    assert_eq!(report.records_written, 1);
    assert_eq!(intel.calls.load(Ordering::SeqCst), 1);

    let records = read_output_lines(&config.output);
    assert_eq!(records[0]["ip"], "8.8.8.8");
    assert_eq!(records[0]["ptr"], "dns.google");
    assert_eq!(records[0]["has_ptr"], true);
    assert_eq!(records[0]["astronomos_el_ptr"]["hostname"], "dns.google");
}

#[tokio::test]
async fn test_no_ptr_writes_record_without_intel_call() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir, "203.0.113.9\n");
    let ptr = FakePtrLookup::new(&[]);
    let intel = FakeIntelSource::new();

    let report = run_intel(&config, &ptr, &intel).await.unwrap();
    assert_eq!(report.records_written, 1);
    // The intel source must never be consulted for an IP with no PTR
    assert_eq!(intel.calls.load(Ordering::SeqCst), 0);

    let records = read_output_lines(&config.output);
    assert_eq!(records[0]["has_ptr"], false);
    assert_eq!(records[0]["ptr"], Value::Null);
    assert_eq!(records[0]["astronomos_el_ptr"], Value::Null);
}

#[tokio::test]
async fn test_blank_and_comment_lines_produce_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir, "# header comment\n\n   \n8.8.8.8\n# trailing\n");
    let ptr = FakePtrLookup::new(&[("8.8.8.8", "dns.google")]);
    let intel = FakeIntelSource::new();

    let report = run_intel(&config, &ptr, &intel).await.unwrap();
    assert_eq!(report.lines_read, 5);
    assert_eq!(report.records_written, 1);
    assert_eq!(report.lines_skipped, 4);
    // Skipped lines never reach the resolver
    assert_eq!(ptr.calls.load(Ordering::SeqCst), 1);

    let records = read_output_lines(&config.output);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["ip"], "8.8.8.8");
}

#[tokio::test]
async fn test_intel_failure_aborts_run_with_valid_prefix_output() {
    let dir = tempfile::tempdir().unwrap();
    // First line has no PTR (written fine), second triggers the failing fetch
    let config = config_for(&dir, "203.0.113.9\n8.8.8.8\n198.51.100.1\n");
    let ptr = FakePtrLookup::new(&[("8.8.8.8", "dns.google")]);
    let intel = FakeIntelSource::failing();

    let err = run_intel(&config, &ptr, &intel).await.unwrap_err();
    let rendered = format!("{:#}", err);
    assert!(rendered.contains("dns.google"));
    assert!(rendered.contains("rate limited"));

    // The partially written file is a valid prefix of the full output
    let records = read_output_lines(&config.output);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["ip"], "203.0.113.9");
}

#[tokio::test]
async fn test_rerun_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir, "8.8.8.8\n203.0.113.9\n");
    let ptr = FakePtrLookup::new(&[("8.8.8.8", "dns.google")]);

    run_intel(&config, &ptr, &FakeIntelSource::new()).await.unwrap();
    let first = fs::read(&config.output).unwrap();
    run_intel(&config, &ptr, &FakeIntelSource::new()).await.unwrap();
    let second = fs::read(&config.output).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_whitespace_around_ip_is_trimmed() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir, "  8.8.8.8  \n");
    let ptr = FakePtrLookup::new(&[("8.8.8.8", "dns.google")]);
    let intel = FakeIntelSource::new();

    run_intel(&config, &ptr, &intel).await.unwrap();
    let records = read_output_lines(&config.output);
    assert_eq!(records[0]["ip"], "8.8.8.8");
}
