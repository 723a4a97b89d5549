//! Intel lookup via an external process.

use serde_json::Value;
use tokio::process::Command;

use crate::error_handling::IntelError;

use super::IntelSource;

/// Intel source that shells out to an external CLI tool.
///
/// Invoked as `<program> el ptr <hostname> -o json`; the tool is expected to
/// print exactly one JSON object to stdout on success and exit non-zero with
/// diagnostics on failure. No timeout is enforced on the subprocess.
pub struct CommandIntelSource {
    program: String,
}

impl CommandIntelSource {
    /// Creates a source invoking `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl IntelSource for CommandIntelSource {
    async fn fetch(&self, hostname: &str) -> Result<Value, IntelError> {
        let output = Command::new(&self.program)
            .args(["el", "ptr", hostname, "-o", "json"])
            .output()
            .await
            .map_err(|source| IntelError::SpawnError {
                command: self.program.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.status.success() {
            return Err(IntelError::CommandFailed {
                command: self.program.clone(),
                status: output
                    .status
                    .code()
                    .map_or_else(|| "signal".to_string(), |c| c.to_string()),
                stdout,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        serde_json::from_str(stdout.trim()).map_err(|source| IntelError::InvalidJson {
            command: self.program.clone(),
            source,
        })
    }
}
