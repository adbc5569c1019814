//! Errors

use salvo::http::StatusCode;
use tracing::error;

use storefront_app::domain::contact::ContactServiceError;

use crate::contact::models::ContactResponse;

pub(crate) fn into_error_response(error: &ContactServiceError) -> (StatusCode, ContactResponse) {
    error!("failed to send contact email: {error}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ContactResponse::failed(error.to_string()),
    )
}
