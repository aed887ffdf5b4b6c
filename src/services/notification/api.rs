//! Mattermost Webhook API Client
//!
//! The HTTP seam of the channel. `MattermostApi` is what the notifier
//! depends on; `HttpMattermostApi` is the reqwest-backed implementation.

use async_trait::async_trait;

use crate::services::proxy::{build_http_client, HttpClientOptions};
use crate::utils::error::AppResult;

use super::types::{MattermostNotificationBody, NotificationError};

/// Posts a message body to an incoming-webhook URL.
#[async_trait]
pub trait MattermostApi: Send + Sync {
    /// POST `body` to `url` and return the response text.
    ///
    /// Mattermost answers a successful post with `ok`. Transport failures
    /// are returned as `Err`; non-2xx responses are returned as text.
    async fn push(
        &self,
        url: &str,
        body: &MattermostNotificationBody,
    ) -> Result<String, NotificationError>;
}

/// reqwest implementation of [`MattermostApi`].
pub struct HttpMattermostApi {
    client: reqwest::Client,
}

impl HttpMattermostApi {
    pub fn new(options: &HttpClientOptions) -> AppResult<Self> {
        Ok(Self {
            client: build_http_client(options)?,
        })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MattermostApi for HttpMattermostApi {
    async fn push(
        &self,
        url: &str,
        body: &MattermostNotificationBody,
    ) -> Result<String, NotificationError> {
        let response = self.client.post(url).json(body).send().await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            tracing::debug!("Mattermost webhook returned HTTP {}", status.as_u16());
        }
        Ok(text)
    }
}

impl std::fmt::Debug for HttpMattermostApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpMattermostApi").finish_non_exhaustive()
    }
}
