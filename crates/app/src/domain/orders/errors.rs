//! Orders service errors.

use thiserror::Error;

use crate::mail::MailError;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("invalid order submission")]
    InvalidRequest,

    #[error("email is not configured")]
    NotConfigured,

    #[error(transparent)]
    Transport(#[from] MailError),
}
