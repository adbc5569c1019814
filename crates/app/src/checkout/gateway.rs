//! Order-notification endpoint client.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use thiserror::Error;

use storefront::checkout::{OrderRequest, OrderResponse};

/// Errors returned when submitting an order.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The endpoint could not be reached or answered with an unreadable body.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint refused the order.
    #[error("order rejected with status {status}: {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,

        /// Message returned by the endpoint.
        message: String,
    },
}

/// Where orders are submitted.
#[automock]
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Submits an order, returning the endpoint's confirmation.
    async fn submit(&self, order: OrderRequest) -> Result<OrderResponse, GatewayError>;
}

/// Posts orders as JSON to an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpOrderGateway {
    endpoint: String,
    http: Client,
}

impl HttpOrderGateway {
    /// Create a gateway posting to `endpoint`.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: Client::new(),
        }
    }
}

#[async_trait]
impl OrderGateway for HttpOrderGateway {
    async fn submit(&self, order: OrderRequest) -> Result<OrderResponse, GatewayError> {
        let response = self.http.post(&self.endpoint).json(&order).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<OrderResponse>(&text)
            .map(|body| body.message)
            .unwrap_or(text);

        Err(GatewayError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
