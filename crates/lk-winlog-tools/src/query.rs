//! Query parameters for reading a Windows event log channel.

use serde::Deserialize;

use crate::runner::ToolInvocation;

/// Parameters for one event log query: which channel, which event
/// identifier, and how many of the most recent matching records to fetch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventQuery {
    /// Named log channel (e.g., "Security", "System").
    #[serde(default = "default_channel")]
    pub channel: String,
    /// Numeric event identifier (e.g., 4625 = failed logon attempt).
    #[serde(default = "default_event_id")]
    pub event_id: u32,
    /// Number of most-recent matching records to retrieve.
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_channel() -> String {
    "Security".to_string()
}

fn default_event_id() -> u32 {
    4625
}

fn default_count() -> u32 {
    50
}

impl Default for EventQuery {
    fn default() -> Self {
        Self {
            channel: default_channel(),
            event_id: default_event_id(),
            count: default_count(),
        }
    }
}

impl EventQuery {
    pub fn new(channel: impl Into<String>, event_id: u32, count: u32) -> Self {
        Self {
            channel: channel.into(),
            event_id,
            count,
        }
    }

    /// XPath filter selecting records whose System/EventID equals
    /// `event_id`.
    pub fn xpath(&self) -> String {
        format!("*[System[(EventID={})]]", self.event_id)
    }

    /// Build the tool invocation for this query: query-events subcommand,
    /// XML output, record limit, newest first.
    pub fn invocation(&self, tool: &str) -> ToolInvocation {
        ToolInvocation::new(
            tool,
            vec![
                "qe".to_string(),
                self.channel.clone(),
                format!("/q:{}", self.xpath()),
                "/f:xml".to_string(),
                format!("/c:{}", self.count),
                "/rd:true".to_string(),
            ],
        )
    }
}
