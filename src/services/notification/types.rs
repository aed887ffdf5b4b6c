//! Notification Core Types
//!
//! Events, channel settings, the Mattermost wire body, delivery outcomes
//! and channel errors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of events a notification channel can be asked to deliver.
///
/// Serialized as the variant name. Names this channel does not know
/// deserialize into `Unknown` so the caller gets an `InvalidArgument`
/// error from `notify` instead of a parse failure upstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum NotificationType {
    /// A user requested a new title
    NewRequest,
    /// A user reported an issue with a title
    Issue,
    RequestAvailable,
    RequestApproved,
    AdminNote,
    /// Channel test ping
    Test,
    RequestDeclined,
    /// A request could not be handed to the downstream media system and
    /// was parked in the fault queue for retrying
    FaultQueueAdd,
    /// Any kind name not listed above
    Unknown(String),
}

impl NotificationType {
    /// Parse from a kind name. Never fails; unrecognized names become `Unknown`.
    pub fn from_str_value(s: &str) -> Self {
        match s {
            "NewRequest" => Self::NewRequest,
            "Issue" => Self::Issue,
            "RequestAvailable" => Self::RequestAvailable,
            "RequestApproved" => Self::RequestApproved,
            "AdminNote" => Self::AdminNote,
            "Test" => Self::Test,
            "RequestDeclined" => Self::RequestDeclined,
            "FaultQueueAdd" | "ItemAddedToFaultQueue" => Self::FaultQueueAdd,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NewRequest => write!(f, "NewRequest"),
            Self::Issue => write!(f, "Issue"),
            Self::RequestAvailable => write!(f, "RequestAvailable"),
            Self::RequestApproved => write!(f, "RequestApproved"),
            Self::AdminNote => write!(f, "AdminNote"),
            Self::Test => write!(f, "Test"),
            Self::RequestDeclined => write!(f, "RequestDeclined"),
            Self::FaultQueueAdd => write!(f, "FaultQueueAdd"),
            Self::Unknown(name) => write!(f, "{}", name),
        }
    }
}

impl From<String> for NotificationType {
    fn from(s: String) -> Self {
        Self::from_str_value(&s)
    }
}

impl From<NotificationType> for String {
    fn from(t: NotificationType) -> Self {
        t.to_string()
    }
}

/// A single event to notify about. Built by the caller, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationModel {
    pub notification_type: NotificationType,
    pub title: String,
    pub user: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// When the event happened (RFC 3339). Only used for logging.
    #[serde(default = "now_rfc3339")]
    pub date_time: String,
}

fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

impl NotificationModel {
    pub fn new(
        notification_type: NotificationType,
        title: impl Into<String>,
        user: impl Into<String>,
    ) -> Self {
        Self {
            notification_type,
            title: title.into(),
            user: user.into(),
            body: None,
            date_time: now_rfc3339(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// The Test event carries no title or user.
    pub fn test() -> Self {
        Self::new(NotificationType::Test, "", "")
    }
}

/// Mattermost channel settings, owned by the settings provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MattermostNotificationSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub webhook_url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

impl MattermostNotificationSettings {
    /// Whether a push may be attempted with these settings.
    pub fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Err("channel is disabled".to_string());
        }
        if self.webhook_url.is_empty() {
            return Err("webhook URL is empty".to_string());
        }
        Ok(())
    }
}

/// JSON body POSTed to the incoming webhook.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MattermostNotificationBody {
    pub username: String,
    pub channel: String,
    pub text: String,
}

impl MattermostNotificationBody {
    /// Build the wire body for `text`. A missing channel is sent as `""`.
    pub fn new(settings: &MattermostNotificationSettings, text: impl Into<String>) -> Self {
        Self {
            username: settings.username.clone(),
            channel: settings.channel.clone().unwrap_or_default(),
            text: text.into(),
        }
    }
}

/// Result of a single push attempt. Never escapes as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    /// The webhook answered `ok`
    Delivered,
    /// The webhook answered something other than `ok`
    Rejected(String),
    /// The request could not be completed
    Failed(String),
}

impl PushOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }
}

/// What `notify` did with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// Settings were absent or invalid; nothing was sent
    Skipped(String),
    /// The event kind is deliberately not sent by this channel
    Unhandled(NotificationType),
    /// A push was attempted
    Pushed(PushOutcome),
}

/// Notification channel errors
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("HTTP request failed: {0}")]
    HttpError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<reqwest::Error> for NotificationError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for NotificationError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
