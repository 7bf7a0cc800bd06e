//! File logging setup
//!
//! Library code logs through the `log` facade. The binary calls [`init`] once at
//! startup; when logging is disabled in the config no logger is installed and
//! the macros are no-ops.

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Install the file logger described by `config`
///
/// Returns `Ok(false)` without touching the filesystem when logging is disabled.
///
/// # Errors
/// Returns an error if the level is invalid, the log file cannot be opened, or a
/// logger is already installed in this process
pub fn init(config: &LoggingConfig) -> Result<bool> {
    if !config.enabled {
        return Ok(false);
    }
    let path = get_log_file_path()?;
    init_with_path(config.level_filter()?, &path)?;
    Ok(true)
}

/// Install a file logger writing to `path` at `level`
pub fn init_with_path(level: log::LevelFilter, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(file)
        .apply()
        .context("A logger is already installed")?;

    log::debug!("Logging to {} at level {}", path.display(), level);
    Ok(())
}

/// Location of the log file under the platform's local data directory
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}
