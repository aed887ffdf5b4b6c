//! Mattermost Notifier
//!
//! Best-effort chat notifications over Mattermost incoming webhooks.
//! It includes:
//! - The notification channel (rendering, validation, delivery)
//! - The reqwest-backed webhook client and its proxy-aware factory
//! - JSON config storage that doubles as the settings provider

pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

pub use models::settings::AppConfig;
pub use services::notification::{
    MattermostNotification, MattermostNotificationSettings, Notification, NotificationError,
    NotificationModel, NotificationType, NotifyOutcome, PushOutcome,
};
pub use storage::ConfigService;
pub use utils::error::{AppError, AppResult};
