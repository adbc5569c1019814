//! Order email responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

/// Message sent when both order emails went out.
pub(crate) const EMAILS_SENT: &str = "Emails sent successfully";

/// Outcome of an order email request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageResponse {
    /// Human-readable outcome
    pub message: String,
}

impl MessageResponse {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
