//! Settings Models
//!
//! On-disk configuration stored in config.json.

use serde::{Deserialize, Serialize};

use crate::services::notification::MattermostNotificationSettings;
use crate::services::proxy::HttpClientOptions;

/// Application configuration stored in config.json
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Mattermost channel settings
    #[serde(default)]
    pub mattermost: MattermostNotificationSettings,
    /// Outbound HTTP client options
    #[serde(default)]
    pub http: HttpClientOptions,
}

impl AppConfig {
    /// Validate the configuration.
    ///
    /// A disabled or URL-less Mattermost section is a valid file; the
    /// notifier skips sending in that case.
    pub fn validate(&self) -> Result<(), String> {
        self.http.validate()
    }
}
