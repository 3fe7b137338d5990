//! Export driver: runs one query and writes the result to disk.
//!
//! Bridges between the configured query, the command runner, and the
//! console contract: every outcome the operator is expected to handle is
//! printed to stdout, and the returned code becomes the process exit code.

use chrono::Local;

use lk_winlog_tools::{CommandRunner, EventLogReader, WinlogError, export};

use crate::config::ExportConfig;

/// Run a single export and return the exit code for the process.
///
/// Tool-level failures (missing binary, non-zero exit) are reported on
/// stdout and mapped to exit code 1. Anything else, filesystem errors
/// included, propagates to the caller untranslated.
pub async fn run(config: &ExportConfig, runner: &dyn CommandRunner) -> anyhow::Result<i32> {
    let query = &config.query;
    println!(
        "[Log and Key] Querying {} log for Event ID {} (latest {})...",
        query.channel, query.event_id, query.count
    );

    let reader = EventLogReader::with_tool(&config.tool);
    let xml = match reader.query(query, runner).await {
        Ok(xml) => xml,
        Err(WinlogError::ToolNotFound(tool)) => {
            println!("Error: {tool} not found (this must be run on Windows).");
            return Ok(1);
        }
        Err(WinlogError::ToolFailed(detail)) => {
            println!("Error: {} failed.", config.tool);
            println!("{detail}");
            return Ok(1);
        }
        Err(other) => return Err(other.into()),
    };

    if xml.is_empty() {
        println!("No events returned.");
        return Ok(0);
    }

    tracing::debug!(bytes = xml.len(), "query returned event records");

    let path = export::output_path(
        &config.output_dir,
        &query.channel,
        query.event_id,
        Local::now(),
    );
    export::save_text(&xml, &path).await?;
    tracing::debug!(path = %path.display(), "export written");

    println!("Saved to: {}", path.display());
    Ok(0)
}
