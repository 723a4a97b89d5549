//! Line-oriented input reading.
//!
//! Both pipelines consume their input one line at a time. `LineReader` wraps
//! a buffered file reader and yields `(line_number, text)` pairs lazily in
//! file order, so arbitrarily large inputs never need to fit in memory.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};

/// A lazy, finite, non-restartable sequence of numbered lines from a file.
///
/// Line numbers are 1-based and follow file order. The reader is consumed as
/// it is iterated; open a new one to re-read a file.
#[derive(Debug)]
pub struct LineReader {
    lines: Lines<BufReader<File>>,
    line_number: usize,
}

impl LineReader {
    /// Opens `path` for buffered line reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened (missing file,
    /// permissions). There is no partial recovery; callers treat this as
    /// fatal.
    pub async fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .await
            .with_context(|| format!("Failed to open input file: {}", path.display()))?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
            line_number: 0,
        })
    }

    /// Returns the next `(line_number, text)` pair, or `None` at end of file.
    ///
    /// The returned text has the trailing newline stripped but is otherwise
    /// untouched; skipping blank or comment lines is the caller's concern.
    pub async fn next_line(&mut self) -> Result<Option<(usize, String)>> {
        match self.lines.next_line().await.context("Failed to read input line")? {
            Some(text) => {
                self.line_number += 1;
                Ok(Some((self.line_number, text)))
            }
            None => Ok(None),
        }
    }
}
