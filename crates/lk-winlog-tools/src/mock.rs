//! Mock command runner for testing: scripted captures, recorded invocations.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::error::{WinlogError, WinlogResult};
use crate::runner::{CommandRunner, ToolCapture, ToolInvocation};

/// Mock runner that serves scripted outcomes and records every invocation.
/// All tests use this instead of the real Windows tooling so the suite runs
/// in CI on any platform.
pub struct MockCommandRunner {
    /// Queued outcomes returned by `run` (FIFO order).
    outcomes: Mutex<Vec<WinlogResult<ToolCapture>>>,
    /// All invocations passed to `run` (for test assertions).
    invocations: Mutex<Vec<ToolInvocation>>,
}

impl MockCommandRunner {
    /// Create a new mock with no scripted outcomes.
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(Vec::new()),
            invocations: Mutex::new(Vec::new()),
        }
    }

    /// Mock pre-loaded with a single outcome.
    pub fn with_outcome(outcome: WinlogResult<ToolCapture>) -> Self {
        let mock = Self::new();
        mock.queue_outcome(outcome);
        mock
    }

    /// Mock whose next run reports the tool missing from the host.
    pub fn not_found(program: impl Into<String>) -> Self {
        Self::with_outcome(Err(WinlogError::ToolNotFound(program.into())))
    }

    /// Mock whose next run exits 0 with the given stdout and empty stderr.
    pub fn with_stdout(stdout: impl Into<String>) -> Self {
        Self::with_outcome(Ok(ToolCapture {
            stdout: stdout.into(),
            stderr: String::new(),
            code: Some(0),
        }))
    }

    /// Mock whose next run exits with `code` and the given streams.
    pub fn with_exit(code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::with_outcome(Ok(ToolCapture {
            stdout: stdout.into(),
            stderr: stderr.into(),
            code: Some(code),
        }))
    }

    /// Queue an additional outcome.
    pub fn queue_outcome(&self, outcome: WinlogResult<ToolCapture>) {
        self.outcomes.lock().unwrap().push(outcome);
    }

    /// Copies of every invocation that was run.
    pub fn invocations(&self) -> Vec<ToolInvocation> {
        self.invocations.lock().unwrap().clone()
    }

    /// The most recent invocation, if any.
    pub fn last_invocation(&self) -> Option<ToolInvocation> {
        self.invocations.lock().unwrap().last().cloned()
    }
}

impl Default for MockCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandRunner for MockCommandRunner {
    async fn run(&self, invocation: &ToolInvocation) -> WinlogResult<ToolCapture> {
        self.invocations.lock().unwrap().push(invocation.clone());

        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            // Nothing scripted: report the tool as missing.
            return Err(WinlogError::ToolNotFound(invocation.program.clone()));
        }
        outcomes.remove(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invocation() -> ToolInvocation {
        ToolInvocation::new("wevtutil", vec!["qe".to_string(), "Security".to_string()])
    }

    #[tokio::test]
    async fn records_invocations() {
        let mock = MockCommandRunner::with_stdout("<Events/>");
        mock.run(&invocation()).await.unwrap();

        let recorded = mock.invocations();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].program, "wevtutil");
        assert_eq!(mock.last_invocation().unwrap().args[0], "qe");
    }

    #[tokio::test]
    async fn returns_queued_outcomes_in_order() {
        let mock = MockCommandRunner::with_stdout("first");
        mock.queue_outcome(Ok(ToolCapture {
            stdout: "second".to_string(),
            stderr: String::new(),
            code: Some(0),
        }));

        assert_eq!(mock.run(&invocation()).await.unwrap().stdout, "first");
        assert_eq!(mock.run(&invocation()).await.unwrap().stdout, "second");
    }

    #[tokio::test]
    async fn unscripted_run_reports_not_found() {
        let mock = MockCommandRunner::new();
        let result = mock.run(&invocation()).await;
        assert!(matches!(
            result,
            Err(WinlogError::ToolNotFound(ref p)) if p == "wevtutil"
        ));
    }

    #[tokio::test]
    async fn with_exit_carries_streams_and_code() {
        let mock = MockCommandRunner::with_exit(2, "", "Access is denied.");
        let capture = mock.run(&invocation()).await.unwrap();
        assert!(!capture.succeeded());
        assert_eq!(capture.code, Some(2));
        assert_eq!(capture.stderr, "Access is denied.");
    }
}
