//! Message Rendering
//!
//! Maps an event to the text posted to the channel.

use super::types::{NotificationError, NotificationModel, NotificationType};

/// Fixed text sent for `NotificationType::Test`.
pub const TEST_MESSAGE: &str =
    "This is a test from Ombi, if you can see this then we have successfully pushed a notification!";

/// Render the message text for an event.
///
/// Returns `Ok(None)` for kinds this channel deliberately does not send,
/// and `InvalidArgument` for kinds it does not recognize.
pub fn render_message(model: &NotificationModel) -> Result<Option<String>, NotificationError> {
    let text = match &model.notification_type {
        NotificationType::NewRequest => {
            format!("{} has been requested by user: {}", model.title, model.user)
        }
        NotificationType::Issue => format!(
            "A new issue: {} has been reported by user: {} for the title: {}",
            model.body.as_deref().unwrap_or_default(),
            model.user,
            model.title
        ),
        NotificationType::Test => TEST_MESSAGE.to_string(),
        NotificationType::FaultQueueAdd => format!(
            "Hello! The user '{}' has requested {} but it could not be added. This has been added into the requests queue and will keep retrying",
            model.user, model.title
        ),
        NotificationType::RequestAvailable
        | NotificationType::RequestApproved
        | NotificationType::AdminNote
        | NotificationType::RequestDeclined => return Ok(None),
        NotificationType::Unknown(name) => {
            return Err(NotificationError::InvalidArgument(format!(
                "unsupported notification type: {}",
                name
            )))
        }
    };
    Ok(Some(text))
}
