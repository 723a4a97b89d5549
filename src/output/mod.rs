//! JSONL output writing.
//!
//! Streams one compact JSON object per line to an output file, flushing per
//! record so that a crash mid-run leaves a valid-prefix JSONL file. Non-ASCII
//! characters are preserved literally (serde_json does not escape them).

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};

/// Streaming JSONL writer.
///
/// Records are serialized compactly and written in the order they arrive.
/// Each record is flushed before `write_record` returns, so partial output is
/// always a prefix of complete lines.
pub struct JsonlWriter {
    writer: BufWriter<File>,
}

impl JsonlWriter {
    /// Creates the output file at `path`, creating missing parent directories.
    ///
    /// An existing file at `path` is truncated.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the file
    /// cannot be opened for writing.
    pub async fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }
        }
        let file = File::create(path)
            .await
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    /// Serializes `record` as one compact JSON line and flushes it.
    pub async fn write_record<T: Serialize>(&mut self, record: &T) -> Result<()> {
        let mut line = serde_json::to_string(record).context("Failed to serialize record")?;
        line.push('\n');
        self.writer
            .write_all(line.as_bytes())
            .await
            .context("Failed to write output line")?;
        self.writer.flush().await.context("Failed to flush output")?;
        Ok(())
    }
}
