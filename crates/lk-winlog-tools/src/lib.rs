//! Windows event log query and export tools for Log and Key.
//!
//! Provides the XPath query builder for wevtutil-style event log reads, a
//! `CommandRunner` abstraction for testability, the reader that interprets
//! captured tool output, and the persister that writes timestamped XML
//! exports.

pub mod error;
pub mod export;
pub mod mock;
pub mod query;
pub mod reader;
pub mod runner;

// Re-export key types for convenience
pub use error::{WinlogError, WinlogResult};
pub use mock::MockCommandRunner;
pub use query::EventQuery;
pub use reader::{DEFAULT_TOOL, EventLogReader};
pub use runner::{CommandRunner, SystemCommandRunner, ToolCapture, ToolInvocation};
