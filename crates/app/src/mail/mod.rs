//! Outgoing mail

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use serde::Serialize;
use thiserror::Error;
use zeroize::Zeroizing;

use storefront::notifications::EmailContent;

pub mod http;

pub use http::HttpMailTransport;

/// Errors raised while handing an email to the transport.
#[derive(Debug, Error)]
pub enum MailError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The mail API returned a non-2xx response.
    #[error("unexpected response from mail API: {0}")]
    UnexpectedResponse(String),
}

/// A message ready to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    /// Sender address.
    pub from: String,

    /// Recipient address.
    pub to: String,

    /// Address replies should go to, when different from the sender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,

    /// Subject line.
    pub subject: String,

    /// Plain-text body.
    pub text: String,
}

impl OutgoingEmail {
    /// Addresses rendered content from `from` to `to`.
    pub fn new(from: impl Into<String>, to: impl Into<String>, content: EmailContent) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            reply_to: None,
            subject: content.subject,
            text: content.text,
        }
    }

    /// Sets the reply-to address.
    #[must_use]
    pub fn reply_to(mut self, address: impl Into<String>) -> Self {
        self.reply_to = Some(address.into());
        self
    }
}

/// Something that delivers email.
#[automock]
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Hands one message to the transport.
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError>;
}

/// Mail settings as read from configuration; any of them may be missing.
#[derive(Debug, Clone, Default)]
pub struct MailConfig {
    /// Mail API endpoint that accepts JSON messages.
    pub api_url: Option<String>,

    /// Mail account address used as the sender.
    pub sender: Option<String>,

    /// Mail account secret.
    pub api_token: Option<String>,

    /// Store owner address receiving order and contact notifications.
    pub owner: Option<String>,
}

impl MailConfig {
    /// Complete settings, or `None` when any value is missing or blank.
    pub fn resolve(self) -> Option<MailSettings> {
        let present = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        Some(MailSettings {
            api_url: present(self.api_url)?,
            sender: present(self.sender)?,
            api_token: Zeroizing::new(present(self.api_token)?),
            owner: present(self.owner)?,
        })
    }
}

/// Complete mail settings.
#[derive(Debug, Clone)]
pub struct MailSettings {
    /// Mail API endpoint.
    pub api_url: String,

    /// Sender address.
    pub sender: String,

    /// Mail account secret.
    pub api_token: Zeroizing<String>,

    /// Store owner address.
    pub owner: String,
}

/// A transport together with the fixed sender and owner addresses.
#[derive(Clone)]
pub struct Mailer {
    transport: Arc<dyn MailTransport>,
    sender: String,
    owner: String,
}

impl Mailer {
    /// Creates a mailer.
    pub fn new(
        transport: Arc<dyn MailTransport>,
        sender: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            sender: sender.into(),
            owner: owner.into(),
        }
    }

    /// Builds a mailer that sends through the HTTP mail API.
    pub fn from_settings(settings: MailSettings) -> Self {
        let sender = settings.sender.clone();
        let owner = settings.owner.clone();

        Self::new(Arc::new(HttpMailTransport::new(settings)), sender, owner)
    }

    /// Sender address.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Store owner address.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Sends `content` from the sender to `to`.
    ///
    /// # Errors
    ///
    /// Returns a [`MailError`] if the transport fails.
    pub async fn send_to(&self, to: &str, content: EmailContent) -> Result<(), MailError> {
        self.send(OutgoingEmail::new(self.sender.as_str(), to, content))
            .await
    }

    /// Sends a fully addressed message.
    ///
    /// # Errors
    ///
    /// Returns a [`MailError`] if the transport fails.
    pub async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        self.transport.send(email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MailConfig {
        MailConfig {
            api_url: Some("https://mail.example.com/send".to_string()),
            sender: Some("shop@example.com".to_string()),
            api_token: Some("secret".to_string()),
            owner: Some("owner@example.com".to_string()),
        }
    }

    #[test]
    fn resolve_complete_config() {
        let settings = config().resolve();

        assert_eq!(settings.as_ref().map(|s| s.owner.as_str()), Some("owner@example.com"));
        assert_eq!(settings.map(|s| s.api_token.to_string()), Some("secret".to_string()));
    }

    #[test]
    fn resolve_rejects_missing_or_blank_values() {
        assert!(
            MailConfig {
                owner: None,
                ..config()
            }
            .resolve()
            .is_none()
        );

        assert!(
            MailConfig {
                api_token: Some("  ".to_string()),
                ..config()
            }
            .resolve()
            .is_none()
        );
    }

    #[test]
    fn outgoing_email_serializes_without_empty_reply_to() -> Result<(), serde_json::Error> {
        let email = OutgoingEmail::new(
            "a@example.com",
            "b@example.com",
            EmailContent {
                subject: "Hi".to_string(),
                text: "Body".to_string(),
            },
        );

        let value = serde_json::to_value(&email)?;

        assert!(value.get("reply_to").is_none());
        assert_eq!(
            serde_json::to_value(email.reply_to("c@example.com"))?.get("reply_to"),
            Some(&serde_json::json!("c@example.com"))
        );

        Ok(())
    }
}
