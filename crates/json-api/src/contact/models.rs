//! Contact form responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

/// Message returned when the contact email went out.
pub(crate) const CONTACT_SENT: &str = "Email sent successfully!";

/// Outcome of a contact form submission.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ContactResponse {
    /// Whether the message was forwarded
    pub success: bool,

    /// Human-readable outcome
    pub message: String,
}

impl ContactResponse {
    pub(crate) fn sent() -> Self {
        Self {
            success: true,
            message: CONTACT_SENT.to_string(),
        }
    }

    pub(crate) fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
