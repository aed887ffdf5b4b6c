//! Settings Provider
//!
//! Source of the channel's current settings.

use std::sync::RwLock;

use super::types::MattermostNotificationSettings;

/// Supplies the channel settings on demand.
///
/// `None` means no settings exist; the notifier then sends nothing.
pub trait SettingsProvider: Send + Sync {
    fn get_settings(&self) -> Option<MattermostNotificationSettings>;
}

/// In-memory provider, replaceable at runtime.
#[derive(Debug, Default)]
pub struct StaticSettingsProvider {
    settings: RwLock<Option<MattermostNotificationSettings>>,
}

impl StaticSettingsProvider {
    pub fn new(settings: Option<MattermostNotificationSettings>) -> Self {
        Self {
            settings: RwLock::new(settings),
        }
    }

    pub fn set(&self, settings: Option<MattermostNotificationSettings>) {
        match self.settings.write() {
            Ok(mut guard) => *guard = settings,
            Err(poisoned) => *poisoned.into_inner() = settings,
        }
    }
}

impl SettingsProvider for StaticSettingsProvider {
    fn get_settings(&self) -> Option<MattermostNotificationSettings> {
        match self.settings.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}
