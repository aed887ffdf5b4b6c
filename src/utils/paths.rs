//! Path Utilities
//!
//! Resolves the notifier's configuration directory (~/.mattermost-notifier/).

use std::path::{Path, PathBuf};

use crate::utils::error::{AppError, AppResult};

const APP_DIR_NAME: &str = ".mattermost-notifier";
const CONFIG_FILE_NAME: &str = "config.json";

/// Get the user's home directory
pub fn home_dir() -> AppResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppError::config("Could not determine home directory"))
}

/// Get the notifier directory (~/.mattermost-notifier/)
pub fn app_dir() -> AppResult<PathBuf> {
    Ok(home_dir()?.join(APP_DIR_NAME))
}

/// Get the default config file path (~/.mattermost-notifier/config.json)
pub fn config_path() -> AppResult<PathBuf> {
    Ok(app_dir()?.join(CONFIG_FILE_NAME))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> AppResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Ensure the parent directory of `path` exists
pub fn ensure_parent_dir(path: &Path) -> AppResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}
