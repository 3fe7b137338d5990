//! External tool invocation: spawn a child process, capture its output.
//!
//! `CommandRunner` is the seam that keeps query logic testable on hosts
//! without the real Windows tooling. `SystemCommandRunner` is the real
//! implementation over `tokio::process`; `MockCommandRunner` (in `mock.rs`)
//! serves scripted captures for tests.

use async_trait::async_trait;
use std::time::Duration;
use tokio::process::Command;

use crate::error::{WinlogError, WinlogResult};

/// One request to launch the external tool: program name plus argument
/// vector, executed directly with no shell interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolInvocation {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

/// Captured output of a finished tool process.
#[derive(Debug, Clone)]
pub struct ToolCapture {
    pub stdout: String,
    pub stderr: String,
    /// Process exit code; `None` if the process was terminated by a signal.
    pub code: Option<i32>,
}

impl ToolCapture {
    /// Whether the process exited with status 0.
    pub fn succeeded(&self) -> bool {
        self.code == Some(0)
    }
}

/// Trait for launching the external query tool and capturing stdout,
/// stderr, and exit status.
///
/// A non-zero exit is not an error at this level: the capture carries the
/// status and the caller decides what it means. Errors are reserved for
/// failures to launch, plus the optional deadline.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Launch the tool and wait for it to finish.
    async fn run(&self, invocation: &ToolInvocation) -> WinlogResult<ToolCapture>;
}

/// Runs tools as real child processes.
///
/// No deadline is imposed by default: an unresponsive tool blocks the
/// caller indefinitely. `with_timeout` bounds the wait for callers that
/// opt in.
pub struct SystemCommandRunner {
    timeout: Option<Duration>,
}

impl SystemCommandRunner {
    /// Runner with no deadline (the default contract).
    pub fn new() -> Self {
        Self { timeout: None }
    }

    /// Runner that gives up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

impl Default for SystemCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandRunner for SystemCommandRunner {
    async fn run(&self, invocation: &ToolInvocation) -> WinlogResult<ToolCapture> {
        let program = &invocation.program;
        let mut cmd = Command::new(program);
        cmd.args(&invocation.args);

        let result = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, cmd.output()).await {
                Ok(r) => r,
                Err(_) => {
                    return Err(WinlogError::Timeout {
                        timeout_secs: limit.as_secs(),
                    });
                }
            },
            None => cmd.output().await,
        };

        let output = result.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                WinlogError::ToolNotFound(program.clone())
            } else {
                WinlogError::Spawn {
                    program: program.clone(),
                    message: e.to_string(),
                }
            }
        })?;

        Ok(ToolCapture {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_succeeded_only_on_zero() {
        let ok = ToolCapture {
            stdout: String::new(),
            stderr: String::new(),
            code: Some(0),
        };
        assert!(ok.succeeded());

        let failed = ToolCapture {
            code: Some(2),
            ..ok.clone()
        };
        assert!(!failed.succeeded());

        let signaled = ToolCapture { code: None, ..ok };
        assert!(!signaled.succeeded());
    }

    #[tokio::test]
    async fn missing_program_maps_to_tool_not_found() {
        let runner = SystemCommandRunner::new();
        let invocation = ToolInvocation::new("definitely-not-a-real-tool-xyz", vec![]);
        let result = runner.run(&invocation).await;
        assert!(matches!(
            result,
            Err(WinlogError::ToolNotFound(ref p)) if p == "definitely-not-a-real-tool-xyz"
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn real_command_captures_stdout_and_status() {
        let runner = SystemCommandRunner::new();
        let invocation = ToolInvocation::new("uname", vec![]);
        let capture = runner.run(&invocation).await.unwrap();
        assert!(capture.succeeded());
        assert!(!capture.stdout.is_empty());
        assert!(capture.stderr.is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn nonzero_exit_is_captured_not_raised() {
        let runner = SystemCommandRunner::new();
        let invocation = ToolInvocation::new(
            "ls",
            vec!["/definitely-not-a-real-path-xyz".to_string()],
        );
        let capture = runner.run(&invocation).await.unwrap();
        assert!(!capture.succeeded());
        assert!(!capture.stderr.is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn timeout_raises_after_deadline() {
        let runner = SystemCommandRunner::with_timeout(Duration::from_millis(100));
        let invocation = ToolInvocation::new("sleep", vec!["5".to_string()]);
        let result = runner.run(&invocation).await;
        assert!(matches!(result, Err(WinlogError::Timeout { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn no_timeout_lets_slow_commands_finish() {
        let runner = SystemCommandRunner::new();
        let invocation = ToolInvocation::new("sleep", vec!["0.2".to_string()]);
        let capture = runner.run(&invocation).await.unwrap();
        assert!(capture.succeeded());
    }
}
