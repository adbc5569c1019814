//! Errors

use salvo::http::StatusCode;
use tracing::error;

use storefront_app::domain::orders::OrdersServiceError;

use crate::orders::models::MessageResponse;

pub(crate) fn into_error_response(error: OrdersServiceError) -> (StatusCode, MessageResponse) {
    match error {
        OrdersServiceError::InvalidRequest => (
            StatusCode::BAD_REQUEST,
            MessageResponse::new("Invalid request data"),
        ),
        OrdersServiceError::NotConfigured => {
            error!("order emails requested but mail settings are missing");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                MessageResponse::new("Email configuration error"),
            )
        }
        OrdersServiceError::Transport(source) => {
            error!("failed to send order emails: {source}");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                MessageResponse::new(format!("Failed to send emails: {source}")),
            )
        }
    }
}
