//! JSON Configuration Management
//!
//! Reads and writes config.json and serves its Mattermost section to the
//! notifier.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::models::settings::AppConfig;
use crate::services::notification::{MattermostNotificationSettings, SettingsProvider};
use crate::utils::error::{AppError, AppResult};
use crate::utils::paths::ensure_parent_dir;

/// Configuration service backed by a JSON file
#[derive(Debug)]
pub struct ConfigService {
    config_path: PathBuf,
    config: RwLock<AppConfig>,
}

impl ConfigService {
    /// Open the config at `path`, creating it with defaults if missing.
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let config_path = path.into();
        let config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            let default_config = AppConfig::default();
            Self::save_to_file(&config_path, &default_config)?;
            default_config
        };

        Ok(Self {
            config_path,
            config: RwLock::new(config),
        })
    }

    /// Open the config at the default location.
    pub fn open_default() -> AppResult<Self> {
        Self::open(crate::utils::paths::config_path()?)
    }

    /// Load configuration from a file
    fn load_from_file(path: &Path) -> AppResult<AppConfig> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        config.validate().map_err(AppError::validation)?;
        Ok(config)
    }

    /// Save configuration to a file with pretty formatting
    fn save_to_file(path: &Path, config: &AppConfig) -> AppResult<()> {
        config.validate().map_err(AppError::validation)?;
        ensure_parent_dir(path)?;
        let content = serde_json::to_string_pretty(config)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Get a clone of the current configuration
    pub fn get_config(&self) -> AppConfig {
        match self.config.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Replace the configuration and persist it
    pub fn set_config(&self, config: AppConfig) -> AppResult<()> {
        Self::save_to_file(&self.config_path, &config)?;
        self.replace(config);
        Ok(())
    }

    /// Reload configuration from disk
    pub fn reload(&self) -> AppResult<()> {
        let config = Self::load_from_file(&self.config_path)?;
        self.replace(config);
        Ok(())
    }

    fn replace(&self, config: AppConfig) {
        match self.config.write() {
            Ok(mut guard) => *guard = config,
            Err(poisoned) => *poisoned.into_inner() = config,
        }
    }
}

impl SettingsProvider for ConfigService {
    fn get_settings(&self) -> Option<MattermostNotificationSettings> {
        Some(self.get_config().mattermost)
    }
}
