//! Contact service errors.

use thiserror::Error;

use crate::mail::MailError;

#[derive(Debug, Error)]
pub enum ContactServiceError {
    #[error("email is not configured")]
    NotConfigured,

    #[error(transparent)]
    Transport(#[from] MailError),
}
