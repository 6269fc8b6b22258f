//! Application configuration, loaded once at start-up.

use anyhow::{bail, Context, Result};
use ph_core::FilerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "program.log";

/// Rotate the log file once it reaches this size (1 MiB).
pub const DEFAULT_LOG_MAX_BYTES: u64 = 1024 * 1024;

/// Rotated log files to keep.
pub const DEFAULT_LOG_BACKUPS: usize = 1;

/// Contents of the JSON configuration file.
///
/// ```json
/// { "base_directory": "//fileserver/Production History", "log_file": "upload.log" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Root of the shared Production History tree.
    pub base_directory: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_max_bytes: u64,
    pub log_backups: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_directory: None,
            log_file: None,
            log_max_bytes: DEFAULT_LOG_MAX_BYTES,
            log_backups: DEFAULT_LOG_BACKUPS,
        }
    }
}

impl AppConfig {
    /// Read a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Log file to write, preferring `override_path`.
    pub fn log_path(&self, override_path: Option<PathBuf>) -> PathBuf {
        override_path
            .or_else(|| self.log_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
    }

    /// Resolve the base directory: command line or environment first, then
    /// this file, then the current user's desktop.
    pub fn filer_config(&self, override_base: Option<PathBuf>) -> Result<FilerConfig> {
        let base = override_base
            .or_else(|| self.base_directory.clone())
            .or_else(dirs::desktop_dir);
        match base {
            Some(base) => Ok(FilerConfig::new(base)),
            None => bail!("No base directory configured; pass --base-dir or set base_directory"),
        }
    }
}
