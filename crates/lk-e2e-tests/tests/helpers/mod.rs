//! Shared test harness for end-to-end export scenarios.
//!
//! Wires a real `ExportConfig` aimed at a scratch directory into the real
//! export driver, with a `MockCommandRunner` standing in for the host
//! query tool. Only the process boundary is faked.

use std::path::PathBuf;

use tempfile::TempDir;

use lk_exporter::config::ExportConfig;
use lk_exporter::driver;
use lk_winlog_tools::MockCommandRunner;

/// End-to-end harness: config + driver are real, the tool is scripted.
pub struct ExportHarness {
    /// Export configuration aimed at the scratch directory.
    pub config: ExportConfig,
    /// Scripted stand-in for the host query tool.
    pub runner: MockCommandRunner,
    /// Scratch directory backing `config.output_dir`.
    pub scratch: TempDir,
}

impl ExportHarness {
    /// Harness with stock query settings and an empty outcome queue.
    pub fn with_defaults() -> Self {
        let scratch = TempDir::new().expect("scratch dir");
        let config = ExportConfig {
            output_dir: scratch.path().join("data"),
            ..ExportConfig::default()
        };
        Self {
            config,
            runner: MockCommandRunner::new(),
            scratch,
        }
    }

    /// Run one export through the real driver.
    pub async fn run(&self) -> anyhow::Result<i32> {
        driver::run(&self.config, &self.runner).await
    }

    /// Paths of the files currently present in the output directory.
    pub fn exported_files(&self) -> Vec<PathBuf> {
        match std::fs::read_dir(&self.config.output_dir) {
            Ok(entries) => {
                let mut paths: Vec<PathBuf> = entries.map(|e| e.unwrap().path()).collect();
                paths.sort();
                paths
            }
            Err(_) => Vec::new(),
        }
    }
}
