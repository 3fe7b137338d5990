//! Persisting query results: timestamped output paths and UTF-8 file
//! writes.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

use crate::error::{WinlogError, WinlogResult};

/// Build the output path for one run:
/// `<dir>/<channel>_<event_id>_<YYYYMMDD>_<HHMMSS>.xml` with the channel
/// name lowercased.
///
/// Two runs within the same second produce the same path and the later one
/// overwrites; accepted limitation.
pub fn output_path(
    dir: &Path,
    channel: &str,
    event_id: u32,
    when: DateTime<Local>,
) -> PathBuf {
    let stamp = when.format("%Y%m%d_%H%M%S");
    dir.join(format!("{}_{event_id}_{stamp}.xml", channel.to_lowercase()))
}

/// Write `text` to `path` as UTF-8, creating missing ancestor directories
/// first. Overwrites any existing file at the path.
pub async fn save_text(text: &str, path: &Path) -> WinlogResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| WinlogError::Filesystem(format!("{}: {e}", parent.display())))?;
        }
    }
    tokio::fs::write(path, text)
        .await
        .map_err(|e| WinlogError::Filesystem(format!("{}: {e}", path.display())))
}
