//! Send Order Emails Handler

use salvo::prelude::*;
use tracing::warn;

use storefront_app::{
    context::AppContext,
    domain::orders::{OrdersServiceError, models::OrderSubmission},
};

use crate::{
    extensions::*,
    orders::{
        errors::into_error_response,
        models::{EMAILS_SENT, MessageResponse},
    },
};

/// Send Order Emails Handler
///
/// Sends the order confirmation to the customer and the order notification to the store
/// owner.
#[endpoint(
    tags("orders"),
    summary = "Send order emails",
    responses(
        (status_code = StatusCode::OK, description = "Emails sent"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid request data"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Email configuration or delivery error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<MessageResponse>, StatusError> {
    let app = depot.obtain_or_500::<AppContext>()?;

    let outcome = match req.parse_json::<OrderSubmission>().await {
        Ok(submission) => app.orders.send_order_emails(submission).await,
        Err(source) => {
            warn!("unreadable order submission: {source}");

            Err(OrdersServiceError::InvalidRequest)
        }
    };

    match outcome {
        Ok(()) => Ok(Json(MessageResponse::new(EMAILS_SENT))),
        Err(error) => {
            let (status, body) = into_error_response(error);

            res.status_code(status);

            Ok(Json(body))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use storefront::pricing::UnitPrice;
    use storefront_app::{
        domain::orders::MockOrdersService,
        mail::MailError,
    };

    use crate::test_helpers::orders_service;

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(orders, Router::with_path("api/send-email").post(handler))
    }

    fn order_body() -> Value {
        json!({
            "formData": {
                "firstName": "Sam",
                "lastName": "Rivera",
                "address": "5 Elm Rd",
                "postalCode": "90210",
                "country": "US",
                "phone": "555-0100",
                "email": "sam@example.com"
            },
            "cart": [
                { "Id": 1, "id": "doc-1", "title": "Mug", "price": 19.99, "image": "/mug.png", "quantity": 2 }
            ]
        })
    }

    #[tokio::test]
    async fn test_send_email_success() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_send_order_emails()
            .once()
            .withf(|submission| {
                let Some(cart) = submission.cart.as_deref() else {
                    return false;
                };

                submission.form_data.as_ref().map(|b| b.email.as_str()) == Some("sam@example.com")
                    && cart.len() == 1
                    && cart.first().map(|item| item.unit_price) == Some(UnitPrice::from_cents(1999))
                    && cart.first().map(|item| item.quantity) == NonZeroU32::new(2)
            })
            .return_once(|_| Ok(()));

        let mut res = TestClient::post("http://example.com/api/send-email")
            .json(&order_body())
            .send(&make_service(orders))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.message, "Emails sent successfully");

        Ok(())
    }

    #[tokio::test]
    async fn test_send_email_invalid_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_send_order_emails()
            .once()
            .return_once(|_| Err(OrdersServiceError::InvalidRequest));

        let mut res = TestClient::post("http://example.com/api/send-email")
            .json(&json!({ "formData": null, "cart": [] }))
            .send(&make_service(orders))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "Invalid request data");

        Ok(())
    }

    #[tokio::test]
    async fn test_send_email_malformed_json_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_send_order_emails().never();

        let mut res = TestClient::post("http://example.com/api/send-email")
            .raw_json("{ not json")
            .send(&make_service(orders))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "Invalid request data");

        Ok(())
    }

    #[tokio::test]
    async fn test_send_email_negative_price_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_send_order_emails().never();

        let mut body = order_body();

        if let Some(price) = body.pointer_mut("/cart/0/price") {
            *price = json!(-19.99);
        }

        let mut res = TestClient::post("http://example.com/api/send-email")
            .json(&body)
            .send(&make_service(orders))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "Invalid request data");

        Ok(())
    }

    #[tokio::test]
    async fn test_send_email_not_configured_returns_500() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_send_order_emails()
            .once()
            .return_once(|_| Err(OrdersServiceError::NotConfigured));

        let mut res = TestClient::post("http://example.com/api/send-email")
            .json(&order_body())
            .send(&make_service(orders))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body.message, "Email configuration error");

        Ok(())
    }

    #[tokio::test]
    async fn test_send_email_transport_failure_returns_500_with_reason() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_send_order_emails().once().return_once(|_| {
            Err(OrdersServiceError::Transport(MailError::UnexpectedResponse(
                "503 Service Unavailable".to_string(),
            )))
        });

        let mut res = TestClient::post("http://example.com/api/send-email")
            .json(&order_body())
            .send(&make_service(orders))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(
            body.message,
            "Failed to send emails: unexpected response from mail API: 503 Service Unavailable"
        );

        Ok(())
    }
}
