//! Contact service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use storefront::notifications::{ContactRequest, contact_message};

use crate::{
    domain::contact::errors::ContactServiceError,
    mail::{Mailer, OutgoingEmail},
};

#[derive(Clone)]
pub struct MailContactService {
    mailer: Option<Mailer>,
}

impl MailContactService {
    #[must_use]
    pub fn new(mailer: Option<Mailer>) -> Self {
        Self { mailer }
    }
}

#[async_trait]
impl ContactService for MailContactService {
    async fn send_contact(&self, request: ContactRequest) -> Result<(), ContactServiceError> {
        let mailer = self
            .mailer
            .as_ref()
            .ok_or(ContactServiceError::NotConfigured)?;

        let mut email = OutgoingEmail::new(mailer.sender(), mailer.owner(), contact_message(&request));

        if !request.email.trim().is_empty() {
            email = email.reply_to(request.email);
        }

        mailer.send(email).await?;

        info!("contact message forwarded");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Forwards a contact form submission to the store owner.
    async fn send_contact(&self, request: ContactRequest) -> Result<(), ContactServiceError>;
}
