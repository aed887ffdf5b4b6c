//! Notification Channels
//!
//! A notification channel takes an event (new request, reported issue,
//! fault-queue entry, test ping), renders a message for it and posts the
//! message to a chat service. Delivery is best effort and must never fail
//! the workflow that raised the event.

pub mod api;
pub mod mattermost;
pub mod render;
pub mod settings;
pub mod types;

use async_trait::async_trait;

pub use api::{HttpMattermostApi, MattermostApi};
pub use mattermost::MattermostNotification;
pub use render::{render_message, TEST_MESSAGE};
pub use settings::{SettingsProvider, StaticSettingsProvider};
pub use types::*;

/// A chat notification channel.
#[async_trait]
pub trait Notification: Send + Sync {
    /// Stable channel identifier.
    fn notification_name(&self) -> &'static str;

    /// Notify using the provider's current settings.
    async fn notify(&self, model: &NotificationModel) -> Result<NotifyOutcome, NotificationError>;

    /// Notify using `settings`, or the provider's current settings when `None`.
    ///
    /// Only `NotificationError::InvalidArgument` is ever returned; missing or
    /// invalid settings and failed deliveries are logged and reported through
    /// the outcome.
    async fn notify_with_settings(
        &self,
        model: &NotificationModel,
        settings: Option<&MattermostNotificationSettings>,
    ) -> Result<NotifyOutcome, NotificationError>;
}
