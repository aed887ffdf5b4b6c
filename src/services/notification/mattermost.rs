//! Mattermost Notification Channel
//!
//! Validates the channel settings, renders the event and pushes it to the
//! incoming webhook. Delivery is best effort: only an unrecognized event
//! kind is reported to the caller as an error.

use std::sync::Arc;

use async_trait::async_trait;

use super::api::MattermostApi;
use super::render::render_message;
use super::settings::SettingsProvider;
use super::types::*;
use super::Notification;

/// Mattermost incoming-webhook notifier.
pub struct MattermostNotification {
    api: Arc<dyn MattermostApi>,
    settings: Arc<dyn SettingsProvider>,
}

impl MattermostNotification {
    pub fn new(api: Arc<dyn MattermostApi>, settings: Arc<dyn SettingsProvider>) -> Self {
        Self { api, settings }
    }

    /// Send the Test message with the given settings.
    pub async fn test(
        &self,
        settings: &MattermostNotificationSettings,
    ) -> Result<NotifyOutcome, NotificationError> {
        self.notify_with_settings(&NotificationModel::test(), Some(settings))
            .await
    }

    /// Post `message` to the configured webhook.
    ///
    /// Never fails; the outcome says whether the webhook acknowledged it.
    pub async fn push(&self, settings: &MattermostNotificationSettings, message: &str) -> PushOutcome {
        let body = MattermostNotificationBody::new(settings, message);

        match self.api.push(&settings.webhook_url, &body).await {
            Ok(response) if response == "ok" => PushOutcome::Delivered,
            Ok(response) => PushOutcome::Rejected(response),
            Err(e) => PushOutcome::Failed(e.to_string()),
        }
    }

    fn log_outcome(model: &NotificationModel, outcome: &PushOutcome) {
        match outcome {
            PushOutcome::Delivered => {
                tracing::debug!(
                    "Mattermost notification {} ({}) delivered",
                    model.notification_type,
                    model.date_time
                );
            }
            PushOutcome::Rejected(response) => {
                tracing::error!(
                    "Mattermost did not acknowledge {} notification, response: {}",
                    model.notification_type,
                    response
                );
            }
            PushOutcome::Failed(reason) => {
                tracing::error!(
                    "Mattermost notification {} failed: {}",
                    model.notification_type,
                    reason
                );
            }
        }
    }
}

#[async_trait]
impl Notification for MattermostNotification {
    fn notification_name(&self) -> &'static str {
        "MattermostNotification"
    }

    async fn notify(&self, model: &NotificationModel) -> Result<NotifyOutcome, NotificationError> {
        self.notify_with_settings(model, None).await
    }

    async fn notify_with_settings(
        &self,
        model: &NotificationModel,
        settings: Option<&MattermostNotificationSettings>,
    ) -> Result<NotifyOutcome, NotificationError> {
        let settings = match settings {
            Some(s) => s.clone(),
            None => match self.settings.get_settings() {
                Some(s) => s,
                None => {
                    tracing::debug!("No Mattermost settings available, skipping notification");
                    return Ok(NotifyOutcome::Skipped("no settings".to_string()));
                }
            },
        };

        if let Err(reason) = settings.validate() {
            tracing::error!(
                "Mattermost settings are invalid, not sending notification: {}",
                reason
            );
            return Ok(NotifyOutcome::Skipped(reason));
        }

        let message = match render_message(model)? {
            Some(message) => message,
            None => {
                tracing::debug!(
                    "Mattermost does not send {} notifications",
                    model.notification_type
                );
                return Ok(NotifyOutcome::Unhandled(model.notification_type.clone()));
            }
        };

        let outcome = self.push(&settings, &message).await;
        Self::log_outcome(model, &outcome);
        Ok(NotifyOutcome::Pushed(outcome))
    }
}

impl std::fmt::Debug for MattermostNotification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MattermostNotification").finish_non_exhaustive()
    }
}
