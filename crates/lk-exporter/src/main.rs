//! Log and Key exporter: one-shot Security event log capture.
//!
//! Queries the host's event log for failed logon records and writes the
//! raw XML result to a timestamped file under the output directory.

use std::time::Duration;

use tracing_subscriber::EnvFilter;

use lk_exporter::config::ExportConfig;
use lk_exporter::driver;
use lk_winlog_tools::SystemCommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout is reserved for the export report.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "lk-exporter starting");

    // ── Load config ─────────────────────────────────────────────
    // Optional positional argument: path to a TOML config file. Without
    // one the compiled-in defaults apply.
    let config = match std::env::args().nth(1) {
        Some(path) => ExportConfig::from_file(&path)?,
        None => ExportConfig::default(),
    };
    tracing::info!(
        channel = %config.query.channel,
        event_id = config.query.event_id,
        count = config.query.count,
        tool = %config.tool,
        "config loaded"
    );

    // ── Command runner ──────────────────────────────────────────
    let runner = match config.timeout_secs {
        Some(secs) => SystemCommandRunner::with_timeout(Duration::from_secs(secs)),
        None => SystemCommandRunner::new(),
    };

    let code = driver::run(&config, &runner).await?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
