//! Event log reader: builds the tool invocation for a query and interprets
//! the captured output.

use crate::error::{WinlogError, WinlogResult};
use crate::query::EventQuery;
use crate::runner::{CommandRunner, ToolCapture};

/// Program name of the host's event log query tool.
pub const DEFAULT_TOOL: &str = "wevtutil";

/// Reads event log records by invoking the host's log query tool through a
/// `CommandRunner`.
pub struct EventLogReader {
    tool: String,
}

impl EventLogReader {
    /// Reader invoking the default tool.
    pub fn new() -> Self {
        Self::with_tool(DEFAULT_TOOL)
    }

    /// Reader invoking a specific tool program (resolved via PATH).
    pub fn with_tool(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }

    /// The tool program this reader invokes.
    pub fn tool(&self) -> &str {
        &self.tool
    }

    /// Query the channel for the most recent matching records and return
    /// the tool's standard output as trimmed XML text.
    ///
    /// An empty string is a valid result: no matching records exist.
    pub async fn query(
        &self,
        query: &EventQuery,
        runner: &dyn CommandRunner,
    ) -> WinlogResult<String> {
        let invocation = query.invocation(&self.tool);
        let capture = runner.run(&invocation).await?;

        if !capture.succeeded() {
            return Err(WinlogError::ToolFailed(failure_detail(
                &self.tool, &capture,
            )));
        }

        Ok(capture.stdout.trim().to_string())
    }
}

impl Default for EventLogReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the diagnostic text for a non-zero exit: the trimmed error stream
/// if non-empty, else the trimmed standard output if non-empty, else a
/// generic message naming the tool. Exactly one source, never joined.
fn failure_detail(tool: &str, capture: &ToolCapture) -> String {
    let stderr = capture.stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }
    let stdout = capture.stdout.trim();
    if !stdout.is_empty() {
        return stdout.to_string();
    }
    format!("{tool} returned a non-zero exit code.")
}
