//! HTTP mail API client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use super::{MailError, MailSettings, MailTransport, OutgoingEmail};

/// Sends email by posting JSON messages to a mail API.
#[derive(Debug, Clone)]
pub struct HttpMailTransport {
    settings: MailSettings,
    http: Client,
}

impl HttpMailTransport {
    /// Create a new transport from the given settings.
    #[must_use]
    pub fn new(settings: MailSettings) -> Self {
        Self {
            settings,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl MailTransport for HttpMailTransport {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        let response = self
            .http
            .post(&self.settings.api_url)
            .bearer_auth(self.settings.api_token.as_str())
            .json(&email)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(MailError::UnexpectedResponse(format!(
                "send request failed with status {status}: {text}"
            )));
        }

        info!(subject = %email.subject, "email accepted by mail API");

        Ok(())
    }
}
