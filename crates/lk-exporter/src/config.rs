//! Exporter configuration, loadable from TOML.

use std::path::PathBuf;

use serde::Deserialize;

use lk_winlog_tools::{DEFAULT_TOOL, EventQuery};

/// Top-level configuration for one export run.
///
/// Every field has a default, so a missing or empty config file yields the
/// stock behavior: the latest 50 Event ID 4625 records from the Security
/// channel, written under `data/`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Which channel, event identifier, and record count to query.
    #[serde(default)]
    pub query: EventQuery,
    /// Directory exported files are written to (created on demand).
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Program name of the event log query tool.
    #[serde(default = "default_tool")]
    pub tool: String,
    /// Upper bound on tool runtime in seconds. None waits indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_tool() -> String {
    DEFAULT_TOOL.to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            query: EventQuery::default(),
            output_dir: default_output_dir(),
            tool: default_tool(),
            timeout_secs: None,
        }
    }
}

impl ExportConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}
